//! Shared fixtures for Braid's cross-crate tests.

/// A sample record used by the `premap` tests.
pub struct Person {
    pub name: String,
    pub height: f64,
}
