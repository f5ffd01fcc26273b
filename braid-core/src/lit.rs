use crate::Format;

/// A closed formatter that emits a fixed piece of text.
///
/// Created by [`lit`]. `lit("")` is the two-sided identity for
/// [`Format::then`].
pub struct Lit {
    text: String,
}

/// Creates a formatter that demands no arguments and emits `text`
/// unchanged.
pub fn lit(text: impl Into<String>) -> Lit {
    Lit { text: text.into() }
}

impl Format for Lit {
    type Args = ();

    fn write(&self, (): (), out: &mut String) {
        out.push_str(&self.text);
    }
}
