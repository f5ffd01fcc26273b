//! Surrounding assembled text with a boundary.

use braid_core::Format;

/// Emits `boundary`, then `format`'s text, then `boundary` again.
///
/// Behaves exactly like composing a literal boundary before and after the
/// formatter.
pub fn wrap<F: Format>(boundary: impl Into<String>, format: F) -> impl Format<Args = F::Args> {
    let boundary = boundary.into();
    format.map(move |text| format!("{boundary}{text}{boundary}"))
}

#[cfg(test)]
mod tests {
    use braid_core::{Format, from_fn, lit};

    use super::*;

    #[test]
    fn wraps_both_sides() {
        let int = from_fn(|value: i64| value.to_string());
        assert_eq!(wrap("'", int).format((50,)), "'50'");
    }

    #[test]
    fn matches_explicit_literal_composition() {
        let wrapped = wrap("|", lit("mid"));
        let composed = lit("|").then(lit("mid")).then(lit("|"));
        assert_eq!(wrapped.format(()), composed.format(()));
    }

    #[test]
    fn empty_boundary_is_a_no_op() {
        assert_eq!(wrap("", lit("x")).format(()), "x");
    }
}
