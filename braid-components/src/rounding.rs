//! Fixed-precision decimal formatting.

use braid_core::{Format, from_fn};

/// Formats `value` with exactly `places` fractional digits.
///
/// Rounding is half-away-from-zero on the scaled magnitude, so a fractional
/// carry propagates into the integer part: `round_to(1, 99.99)` is
/// `"100.0"`. The sign is taken once from the original value and applied to
/// the assembled magnitude, which keeps `round_to(2, -0.999)` at `"-1.00"`
/// even though the magnitude's integer part rounds up from zero. Negative
/// zero compares equal to zero and comes out unsigned.
///
/// With `places == 0` only the rounded integer is emitted, with no decimal
/// point. Non-finite values fall back to their standard `Display` form
/// (`NaN`, `inf`, `-inf`). An `f64` carries at most 17 significant decimal
/// digits, so fractional digits beyond that are emitted as zeros rather
/// than computed.
pub fn round_to(places: u32, value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let computed = places.min(MAX_COMPUTED_PLACES);
    let factor = 10_u64.pow(computed);
    let raised = (value.abs() * factor as f64).round() as u64;
    let whole = raised / factor;

    if places == 0 {
        return format!("{sign}{whole}");
    }

    let fraction = raised % factor;
    let mut text = format!("{sign}{whole}.{fraction:0width$}", width = computed as usize);
    text.extend(std::iter::repeat_n('0', (places - computed) as usize));
    text
}

/// The most fractional digits an `f64` can meaningfully supply; also keeps
/// the scaling factor within `u64`.
const MAX_COMPUTED_PLACES: u32 = 17;

/// A float hole that emits exactly `places` fractional digits.
pub fn fixed(places: u32) -> impl Format<Args = (f64, ())> {
    from_fn(move |value: f64| round_to(places, value))
}
