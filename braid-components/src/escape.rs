//! HTML escaping of assembled text.

use braid_core::Format;

/// Passes the assembled text through HTML text escaping.
///
/// Escapes the characters that are unsafe inside an HTML text node (`&`,
/// `<`, `>`), leaving everything else untouched. Applied to a composed
/// formatter, the escaping covers the whole assembled output.
pub fn escaped<F: Format>(format: F) -> impl Format<Args = F::Args> {
    format.map(|text| html_escape::encode_text(&text).into_owned())
}

#[cfg(test)]
mod tests {
    use braid_core::{Format, from_fn, lit};

    use super::*;

    #[test]
    fn escapes_markup_characters() {
        let string = from_fn(|value: &str| value.to_string());
        let fragment = escaped(string.then(lit(" & co.")));
        assert_eq!(fragment.format(("<b>",)), "&lt;b&gt; &amp; co.");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escaped(lit("plain text")).format(()), "plain text");
    }
}
