//! Property-based tests for the composition laws and the rounding
//! invariants.
//!
//! The formatter shapes are fixed (the argument chain is a compile-time
//! property) while their literal contents and arguments are generated.

use braid_components::{
    holes::{int, string},
    rounding::round_to,
};
use braid_core::{Format, lit};
use proptest::prelude::*;

proptest! {
    #[test]
    fn empty_literal_is_a_two_sided_identity(text in ".*", value in any::<i64>()) {
        let plain = lit(text.as_str()).then(int());
        let padded_left = lit("").then(lit(text.as_str()).then(int()));
        let padded_right = lit(text.as_str()).then(int()).then(lit(""));

        let expected = plain.format((value,));
        prop_assert_eq!(padded_left.format((value,)), expected.clone());
        prop_assert_eq!(padded_right.format((value,)), expected);
    }

    #[test]
    fn composition_is_associative(
        a in ".*",
        b in ".*",
        value in any::<i64>(),
        name in ".*",
    ) {
        let grouped_left = lit(a.as_str()).then(int()).then(lit(b.as_str())).then(string());
        let grouped_right = lit(a.as_str()).then(int().then(lit(b.as_str()).then(string())));

        prop_assert_eq!(
            grouped_left.format((value, name.clone())),
            grouped_right.format((value, name))
        );
    }

    #[test]
    fn composition_preserves_order(a in "[a-z]{1,8}", b in "[a-z]{1,8}", value in any::<i64>()) {
        let text = lit(a.as_str()).then(int()).then(lit(b.as_str())).format((value,));
        prop_assert_eq!(text, format!("{a}{value}{b}"));
    }

    #[test]
    fn map_covers_everything_composed_inside(name in ".*") {
        let shout = string().then(lit("!")).map(|text| text.to_uppercase());
        prop_assert_eq!(shout.format((name.clone(),)), format!("{name}!").to_uppercase());
    }

    #[test]
    fn rounding_emits_the_requested_fraction_width(
        places in 0_u32..=20,
        value in -1.0e9_f64..1.0e9,
    ) {
        let text = round_to(places, value);
        prop_assert_eq!(text.starts_with('-'), value < 0.0);

        if places == 0 {
            prop_assert!(!text.contains('.'));
        } else {
            let (_, fraction) = text.split_once('.').expect("a fractional part");
            prop_assert_eq!(fraction.len(), places as usize);
            prop_assert!(fraction.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
