//! Core trait and combinators for Braid, a composable, statically checked
//! string-formatting library.
//!
//! A formatter is built from literal text ([`lit`]) and typed holes
//! ([`from_fn`]), and composed with [`Format::then`]. The arguments a
//! formatter still needs are tracked in its [`Format::Args`] chain, so a
//! call with the wrong number, order, or types of arguments is rejected at
//! compile time. There is no runtime format-string parsing and no runtime
//! failure path.

mod args;
mod format;
mod hole;
mod lit;

pub use args::{ArgList, IntoArgs};
pub use format::Format;
pub use hole::{Hole, from_fn};
pub use lit::{Lit, lit};
