//! Standard formatters built on [`braid_core`].
//!
//! Everything in this crate is a thin consumer of the core's public
//! contract: the value holes are built on [`braid_core::from_fn`], and the
//! padding, wrapping, escaping, and rounding helpers are built on
//! composition and [`Format::map`](braid_core::Format::map). No module here
//! has machinery of its own.

pub mod escape;
pub mod holes;
pub mod markup;
pub mod pad;
pub mod rounding;
pub mod wrap;
