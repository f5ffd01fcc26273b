use std::marker::PhantomData;

use crate::{ArgList, Format};

/// A wrapper that adapts a formatter's leading argument type.
///
/// Internally used by `.premap()` to accept an `A` where the wrapped
/// formatter demands a `B`. The emitted text and the rest of the argument
/// chain pass through unchanged.
pub(crate) struct Premapped<F, M, A> {
    inner: F,
    adapt: M,
    _marker: PhantomData<A>,
}

impl<F, M, A> Premapped<F, M, A> {
    /// Creates a new formatter with an adapted leading argument.
    pub(crate) fn new(inner: F, adapt: M) -> Self {
        Self {
            inner,
            adapt,
            _marker: PhantomData,
        }
    }
}

impl<F, M, A, B, Rest> Format for Premapped<F, M, A>
where
    F: Format<Args = (B, Rest)>,
    M: Fn(A) -> B,
    Rest: ArgList,
{
    type Args = (A, Rest);

    fn write(&self, (value, rest): Self::Args, out: &mut String) {
        self.inner.write(((self.adapt)(value), rest), out);
    }
}
