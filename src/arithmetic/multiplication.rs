//!
//! Multiplication of a digit slice by a scalar
//!

use crate::arithmetic::addition::add;
use crate::stdlib::vec::Vec;
use crate::{ConvertBaseError, Digit};


/// Multiply a digit slice by an ordinary non-negative integer
///
/// Runs on the binary expansion of the multiplier: one doubling per bit
/// of `n` and one addition per set bit, so multiplying by the base
/// itself (as [`convert_base`](crate::convert_base) does once per source
/// digit) costs O(log base) slice additions rather than O(base).
///
/// Returns the empty vector (zero) when `n` is zero, and
/// [`ConvertBaseError::InvalidMultiplier`] when `n` is negative.
///
pub fn multiply_by_scalar(n: i64, x: &[Digit], base: u32) -> Result<Vec<Digit>, ConvertBaseError> {
    if n < 0 {
        return Err(ConvertBaseError::InvalidMultiplier(n));
    }

    let mut n = n as u64;
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut result = Vec::new();
    let mut power = x.to_vec();
    loop {
        if n & 1 == 1 {
            result = add(&result, &power, base);
        }
        n >>= 1;
        if n == 0 {
            break;
        }
        power = add(&power, &power, base);
    }

    Ok(result)
}


#[cfg(test)]
mod test_multiply_by_scalar {
    use super::*;

    include!("../test_macros.rs");

    macro_rules! impl_case {
        ($name:ident: $n:literal * [$($x:literal),*] base $base:literal => [$($z:literal),*]) => {
            #[test]
            fn $name() {
                let x = digit_slice!($($x),*);
                let expected = digit_slice!($($z),*);

                let product = multiply_by_scalar($n, x, $base).unwrap();
                assert_eq!(product.as_slice(), expected);
            }
        };
    }

    impl_case!(case_0_times_255: 0 * [5, 5, 2] base 10 => []);
    impl_case!(case_1_times_ff: 1 * [15, 15] base 16 => [15, 15]);
    impl_case!(case_7_times_zero: 7 * [] base 10 => []);
    impl_case!(case_2_times_99: 2 * [9, 9] base 10 => [8, 9, 1]);
    impl_case!(case_37_times_999: 37 * [9, 9, 9] base 10 => [3, 6, 9, 6, 3]);
    impl_case!(case_16_times_1_base16: 16 * [1] base 16 => [0, 1]);
    impl_case!(case_10_times_1024: 10 * [4, 2, 0, 1] base 10 => [0, 4, 2, 0, 1]);
    impl_case!(case_million_times_1: 1000000 * [1] base 10 => [0, 0, 0, 0, 0, 0, 1]);
    impl_case!(case_5_times_11_base2: 5 * [1, 1] base 2 => [1, 1, 1, 1]);

    #[test]
    fn case_negative_multiplier() {
        let err = multiply_by_scalar(-3, &[1, 2], 10).unwrap_err();
        assert_eq!(err, ConvertBaseError::InvalidMultiplier(-3));
    }

    #[test]
    fn case_max_multiplier() {
        // i64::MAX = 0x7fffffffffffffff
        let product = multiply_by_scalar(i64::MAX, &[1], 16).unwrap();
        let mut expected = vec![15; 16];
        expected[15] = 7;
        assert_eq!(product, expected);
    }
}

#[cfg(test)]
mod test_invalid_multiplier {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal) => {
            #[test]
            #[should_panic(expected = "InvalidMultiplier")]
            fn $name() {
                multiply_by_scalar($n, &[1], 10).unwrap();
            }
        };
    }

    impl_case!(case_neg_1: -1);
    impl_case!(case_neg_255: -255);

    #[test]
    #[should_panic(expected = "InvalidMultiplier")]
    fn case_i64_min() {
        multiply_by_scalar(i64::MIN, &[1], 10).unwrap();
    }
}
