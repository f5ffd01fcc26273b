use crate::{ArgList, Format};

/// A wrapper holding one already-supplied argument.
///
/// Internally used by `.apply()`. The stored value is cloned on each
/// application, so the partially applied formatter stays reusable.
pub(crate) struct Applied<F, V> {
    pub(crate) inner: F,
    pub(crate) value: V,
}

impl<F, V, Rest> Format for Applied<F, V>
where
    F: Format<Args = (V, Rest)>,
    V: Clone,
    Rest: ArgList,
{
    type Args = Rest;

    fn write(&self, args: Self::Args, out: &mut String) {
        self.inner.write((self.value.clone(), args), out);
    }
}
