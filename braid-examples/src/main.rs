//! Prints a small receipt assembled from composed formatters.
//!
//! The line formatter is built once and reused for every row; the argument
//! types it demands follow from the holes composed into it.

use braid_components::{
    holes::{int, string},
    pad::{pad_left, pad_right},
    rounding::fixed,
};
use braid_core::{Format, lit};

fn main() {
    let line = pad_right(12, ' ', string())
        .then(lit(" x"))
        .then(pad_left(3, ' ', int()))
        .then(lit("  @ "))
        .then(pad_left(8, ' ', fixed(2)));

    println!("{}", line.format(("Espresso".to_string(), 2, 3.5)));
    println!("{}", line.format(("Croissant".to_string(), 1, 2.25)));
    println!("{}", line.format(("Ristretto".to_string(), 10, 3.0)));

    let total = lit("Total: ").then(fixed(2)).apply(2.0 * 3.5 + 2.25 + 10.0 * 3.0);
    println!("{}", total.format(()));
}
