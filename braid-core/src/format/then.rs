use crate::{ArgList, Format};

/// A wrapper that emits two formatters in sequence.
///
/// Internally used by `.then()` to compose two formatters. The combined
/// argument chain is the first formatter's chain followed by the second's,
/// and the emitted text is the first's followed by the second's, with no
/// separator.
pub(crate) struct Then<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Format for Then<A, B>
where
    A: Format,
    B: Format,
{
    type Args = <A::Args as ArgList>::Concat<B::Args>;

    /// Splits the combined chain and writes the left side, then the right.
    fn write(&self, args: Self::Args, out: &mut String) {
        let (first, second) = <A::Args as ArgList>::split::<B::Args>(args);
        self.first.write(first, out);
        self.second.write(second, out);
    }
}
