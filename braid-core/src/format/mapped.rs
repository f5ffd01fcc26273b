use crate::Format;

/// A wrapper that transforms a formatter's assembled text.
///
/// Internally used by `.map()`. The transform receives the full text the
/// wrapped formatter produced, including everything composed inside it, and
/// its result is what reaches the surrounding output.
pub(crate) struct Mapped<F, T> {
    pub(crate) inner: F,
    pub(crate) transform: T,
}

impl<F, T> Format for Mapped<F, T>
where
    F: Format,
    T: Fn(String) -> String,
{
    type Args = F::Args;

    fn write(&self, args: Self::Args, out: &mut String) {
        let mut assembled = String::new();
        self.inner.write(args, &mut assembled);
        out.push_str(&(self.transform)(assembled));
    }
}
