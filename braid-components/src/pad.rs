//! Fixed-width padding of assembled text.
//!
//! Each helper wraps a formatter with [`Format::map`], so the padding
//! applies to the full text the wrapped formatter assembles. Width is
//! measured in `char`s, and text already at or above the target width is
//! left unchanged; padding never truncates.

use braid_core::Format;

/// Pads the assembled text on both sides to `width` characters.
///
/// When the gap is odd the extra fill character goes on the left.
pub fn pad<F: Format>(width: usize, fill: char, format: F) -> impl Format<Args = F::Args> {
    format.map(move |text| {
        let gap = width.saturating_sub(text.chars().count());
        let right = gap / 2;
        let left = gap - right;
        format!("{}{text}{}", fill_run(fill, left), fill_run(fill, right))
    })
}

/// Pads the assembled text on the left to `width` characters.
pub fn pad_left<F: Format>(width: usize, fill: char, format: F) -> impl Format<Args = F::Args> {
    format.map(move |text| {
        let gap = width.saturating_sub(text.chars().count());
        format!("{}{text}", fill_run(fill, gap))
    })
}

/// Pads the assembled text on the right to `width` characters.
pub fn pad_right<F: Format>(width: usize, fill: char, format: F) -> impl Format<Args = F::Args> {
    format.map(move |text| {
        let gap = width.saturating_sub(text.chars().count());
        format!("{text}{}", fill_run(fill, gap))
    })
}

fn fill_run(fill: char, count: usize) -> String {
    std::iter::repeat_n(fill, count).collect()
}
