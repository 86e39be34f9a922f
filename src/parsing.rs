//! Routines for parsing numeral strings into digit vectors

use crate::stdlib::str;
use crate::stdlib::vec::Vec;
use crate::{ConvertBaseError, Digit};


/// Value of a single character in the digit alphabet
///
/// `0-9` then `a-z`/`A-Z` for values ten through thirty-five; letters
/// are case insensitive.
///
fn digit_value(ch: char) -> Option<Digit> {
    match ch {
        '0'..='9' => Some(ch as Digit - '0' as Digit),
        'a'..='z' => Some(ch as Digit - 'a' as Digit + 10),
        'A'..='Z' => Some(ch as Digit - 'A' as Digit + 10),
        _ => None,
    }
}


/// Parse a numeral string into a digit vector, least significant first
///
/// The input is in conventional reading order (most significant digit
/// first); the returned vector stores digits in the opposite order. The
/// empty string parses to the empty vector, the representation of zero.
/// Leading zero characters are kept as (insignificant) zero digits.
///
/// Fails with [`ConvertBaseError::InvalidDigit`] on the first character
/// that is not a digit of `base`; nothing is returned in that case.
///
pub fn parse_digits(s: &str, base: u32) -> Result<Vec<Digit>, ConvertBaseError> {
    let mut digits = Vec::with_capacity(s.len());
    for ch in s.chars().rev() {
        match digit_value(ch) {
            Some(d) if d < base => digits.push(d),
            _ => return Err(ConvertBaseError::InvalidDigit { ch, base }),
        }
    }
    Ok(digits)
}


/// Parse a numeral from raw bytes
///
/// Decodes using `str::from_utf8` and forwards to [`parse_digits`].
///
/// # Examples
///
/// ```
/// assert_eq!(bigradix::parse_bytes(b"13", 10), Some(vec![3, 1]));
/// assert_eq!(bigradix::parse_bytes(b"13", 2), None);
/// ```
#[inline]
pub fn parse_bytes(buf: &[u8], base: u32) -> Option<Vec<Digit>> {
    str::from_utf8(buf)
        .ok()
        .and_then(|s| parse_digits(s, base).ok())
}



#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, base $base:literal) => {
            #[test]
            #[should_panic(expected = "InvalidDigit")]
            fn $name() {
                parse_digits($input, $base).unwrap();
            }
        };
    }

    impl_case!(case_hello_base10: "hello", base 10);
    impl_case!(case_ff_base10: "ff", base 10);
    impl_case!(case_2_base2: "2", base 2);
    impl_case!(case_a_base10: "a", base 10);
    impl_case!(case_negative_sign: "-12", base 10);
    impl_case!(case_interior_space: "1 2", base 10);
    impl_case!(case_decimal_point: "1.2", base 10);
    impl_case!(case_0x_prefix: "0x12", base 10);

    #[test]
    fn case_error_names_offending_character() {
        let err = parse_digits("12g34", 16).unwrap_err();
        assert_eq!(err, ConvertBaseError::InvalidDigit { ch: 'g', base: 16 });
    }
}
