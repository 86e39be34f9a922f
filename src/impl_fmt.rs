//! Stringification of digit vectors
//!

use crate::arithmetic::strip_insignificant_zeros;
use crate::stdlib::string::String;
use crate::Digit;

// const ZERO_NUMERAL: &str = ${RUST_BIGRADIX_ZERO_NUMERAL} or "0";
include!(concat!(env!("OUT_DIR"), "/zero_numeral.rs"));


/// Character rendering of a single digit value: `0-9`, then lowercase
/// `a-z` for values ten through thirty-five
fn digit_char(d: Digit) -> char {
    debug_assert!(d < 36);
    match d {
        0..=9 => (b'0' + d as u8) as char,
        _ => (b'a' + (d - 10) as u8) as char,
    }
}


/// Format a digit vector as a numeral string, most significant digit first
///
/// Insignificant zero digits are stripped before rendering, and zero
/// itself renders as `ZERO_NUMERAL` (`"0"` unless overridden through the
/// `RUST_BIGRADIX_ZERO_NUMERAL` environment variable at build time).
///
/// Digit values must be below `base`, and the single-character alphabet
/// caps renderable bases at 36; both are debug assertions, not checked
/// in release builds.
///
pub fn format_digits(digits: &[Digit], base: u32) -> String {
    let digits = strip_insignificant_zeros(digits);
    if digits.is_empty() {
        return String::from(ZERO_NUMERAL);
    }

    debug_assert!(digits.iter().all(|&d| d < base && d < 36));

    let mut out = String::with_capacity(digits.len());
    for &d in digits.iter().rev() {
        out.push(digit_char(d));
    }
    out
}
