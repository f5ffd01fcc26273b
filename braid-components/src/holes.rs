//! Standard value holes.
//!
//! All holes share one implementation: a stringifier handed to
//! [`from_fn`]. The typed variants ([`int`], [`float`], [`boolean`]) are
//! [`display`] with the static argument type narrowed; they behave
//! identically at runtime.

use std::fmt::Display;

use braid_core::{Format, from_fn};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// The WHATWG fragment percent-encode set.
const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// A passthrough hole for string-like values.
pub fn string<S: Into<String>>() -> impl Format<Args = (S, ())> {
    from_fn(|value: S| value.into())
}

/// A hole for any value with a [`Display`] implementation, emitting its
/// standard human-readable form.
pub fn display<T: Display>() -> impl Format<Args = (T, ())> {
    from_fn(|value: T| value.to_string())
}

/// [`display`] narrowed to `i64`.
pub fn int() -> impl Format<Args = (i64, ())> {
    display::<i64>()
}

/// [`display`] narrowed to `f64`.
pub fn float() -> impl Format<Args = (f64, ())> {
    display::<f64>()
}

/// [`display`] narrowed to `bool`.
pub fn boolean() -> impl Format<Args = (bool, ())> {
    display::<bool>()
}

/// A string hole whose value is percent-encoded for use in a URI fragment.
pub fn uri<S: AsRef<str>>() -> impl Format<Args = (S, ())> {
    string::<String>().premap(|value: S| utf8_percent_encode(value.as_ref(), FRAGMENT).to_string())
}

#[cfg(test)]
mod tests {
    use braid_core::{Format, lit};

    use super::*;

    #[test]
    fn string_passes_through() {
        let greeting = lit("Hello ").then(string()).then(lit("!"));
        assert_eq!(greeting.format(("Kris",)), "Hello Kris!");
    }

    #[test]
    fn typed_holes_use_the_display_form() {
        assert_eq!(int().format((5,)), "5");
        assert_eq!(int().format((-12,)), "-12");
        assert_eq!(float().format((1.72,)), "1.72");
        assert_eq!(boolean().format((true,)), "true");
    }

    #[test]
    fn display_accepts_anything_printable() {
        assert_eq!(display::<char>().format(('x',)), "x");
        assert_eq!(display::<u8>().format((255,)), "255");
    }

    #[test]
    fn uri_encodes_the_fragment_set() {
        let link = lit("#").then(uri());
        assert_eq!(link.format(("section one",)), "#section%20one");
        assert_eq!(uri().format(("a\"b<c>d`e",)), "a%22b%3Cc%3Ed%60e");
    }
}
