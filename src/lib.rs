// Copyright 2026 the bigradix developers
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arbitrary-precision radix conversion
//!
//! `bigradix` re-expresses arbitrarily large non-negative integers in a
//! new number base without the precision loss of native fixed-width
//! arithmetic; `u64::from_str_radix` and friends stop at 64 bits, while
//! a numeral here may be as long as memory allows.
//!
//! Internally a number is a vector of digits starting with the least
//! significant:
//!
//! ```text
//! 8    = [8]
//! 16   = [6, 1]
//! 1024 = [4, 2, 0, 1]
//! ```
//!
//! Addition of two such vectors is the only primitive operation;
//! multiplication by a scalar is built from it by binary expansion, and
//! [`convert_base`] evaluates the source numeral positionally using
//! arithmetic carried out entirely in the target base.
//!
//! # Example
//!
//! ```
//! use bigradix::{dec_to_hex, hex_to_dec};
//!
//! assert_eq!(dec_to_hex("1024").unwrap(), "0x400");
//! assert_eq!(hex_to_dec("0x400").unwrap(), "1024");
//!
//! // values well past 64 bits survive untouched
//! let dec = "340282366920938463463374607431768211455";
//! assert_eq!(dec_to_hex(dec).unwrap(), "0xffffffffffffffffffffffffffffffff");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]


extern crate num_integer;
extern crate num_traits;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;
use self::stdlib::string::String;
use self::stdlib::vec::Vec;


pub(crate) mod arithmetic;
mod parsing;

// stringification of digit vectors
mod impl_fmt;

pub use arithmetic::addition::add;
pub use arithmetic::multiplication::multiply_by_scalar;
pub use impl_fmt::format_digits;
pub use parsing::{parse_bytes, parse_digits};


/// Single digit of a positional numeral; always in `[0, base)`
pub type Digit = u32;


/// Error cases for parsing or converting a numeral
#[derive(Debug, PartialEq)]
pub enum ConvertBaseError {
    /// Character is not a valid digit in the claimed base
    InvalidDigit { ch: char, base: u32 },
    /// Negative multiplier given to scalar multiplication
    InvalidMultiplier(i64),
}

impl fmt::Display for ConvertBaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ConvertBaseError::*;

        match *self {
            InvalidDigit { ch, base } => {
                write!(f, "invalid digit {:?} for base {}", ch, base)
            }
            InvalidMultiplier(n) => {
                write!(f, "invalid (negative) multiplier {}", n)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConvertBaseError {
}


/// Re-express the numeral `s` from `from_base` into `to_base`
///
/// The source numeral is evaluated positionally, with every addition and
/// scalar multiplication carried out on `to_base` digit vectors. No
/// intermediate value is ever squeezed through a native fixed-width
/// integer, so numerals of any length convert without precision loss.
///
/// Any character of `s` that is not a digit of `from_base` aborts the
/// whole conversion with [`ConvertBaseError::InvalidDigit`]; there are
/// no partial results.
///
/// # Examples
///
/// ```
/// use bigradix::convert_base;
///
/// assert_eq!(convert_base("255", 10, 16).unwrap(), "ff");
/// assert_eq!(convert_base("ff", 16, 10).unwrap(), "255");
/// assert_eq!(
///     convert_base("18446744073709551615", 10, 16).unwrap(),
///     "ffffffffffffffff",
/// );
/// ```
pub fn convert_base(s: &str, from_base: u32, to_base: u32) -> Result<String, ConvertBaseError> {
    let digits = parse_digits(s, from_base)?;

    let mut out_digits: Vec<Digit> = Vec::new();
    let mut power: Vec<Digit> = vec![1];
    for &digit in digits.iter() {
        // invariant: power holds from_base^i expressed in to_base
        if digit != 0 {
            let term = multiply_by_scalar(digit as i64, &power, to_base)?;
            out_digits = add(&out_digits, &term, to_base);
        }
        power = multiply_by_scalar(from_base as i64, &power, to_base)?;
    }

    Ok(format_digits(&out_digits, to_base))
}


/// Convert a decimal numeral to hexadecimal, prefixed with `"0x"`
///
/// Output digits are lowercase.
///
/// # Examples
///
/// ```
/// assert_eq!(bigradix::dec_to_hex("1024").unwrap(), "0x400");
/// ```
#[inline]
pub fn dec_to_hex(s: &str) -> Result<String, ConvertBaseError> {
    let hex = convert_base(s, 10, 16)?;
    Ok(format!("0x{}", hex))
}

/// Convert a hexadecimal numeral to decimal
///
/// A single leading `"0x"` or `"0X"` is stripped if present, and the
/// digits themselves may be in either case.
///
/// # Examples
///
/// ```
/// assert_eq!(bigradix::hex_to_dec("0x400").unwrap(), "1024");
/// assert_eq!(bigradix::hex_to_dec("FF").unwrap(), "255");
/// ```
#[inline]
pub fn hex_to_dec(s: &str) -> Result<String, ConvertBaseError> {
    let s = match s.get(..2) {
        Some("0x") | Some("0X") => &s[2..],
        _ => s,
    };
    convert_base(s, 16, 10)
}


#[cfg(test)]
mod bigradix_tests {
    use super::*;

    include!("lib.tests.rs");
}

#[cfg(all(test, property_tests))]
extern crate proptest;
