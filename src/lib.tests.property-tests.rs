// Property tests to be included by lib.rs (if enabled)


mod native_agreement {
    use super::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< dec_to_hex_matches_native_ $t >](n: $t) {
                    let hex = dec_to_hex(&n.to_string()).unwrap();
                    prop_assert_eq!(hex, format!("{:#x}", n));
                }

                #[test]
                fn [< hex_to_dec_matches_native_ $t >](n: $t) {
                    let dec = hex_to_dec(&format!("{:x}", n)).unwrap();
                    prop_assert_eq!(dec, n.to_string());
                }
            } }
        };
    }

    impl_test!(u8);
    impl_test!(u16);
    impl_test!(u32);
    impl_test!(u64);
    impl_test!(u128);
}

mod roundtrip {
    use super::*;

    proptest! {
        #[test]
        fn convert_and_back(
            digits in proptest::collection::vec(0u32..36, 0..64),
            from_base in 2u32..=36,
            to_base in 2u32..=36,
        ) {
            let numeral: String = digits.iter()
                .map(|&d| char::from_digit(d % from_base, 36).unwrap())
                .collect();

            let there = convert_base(&numeral, from_base, to_base).unwrap();
            let back = convert_base(&there, to_base, from_base).unwrap();

            // canonicalize the input the same way the round trip does
            let canonical = convert_base(&numeral, from_base, from_base).unwrap();
            prop_assert_eq!(back, canonical);
        }
    }
}

mod arithmetic {
    use super::*;

    fn to_digit_vec(mut n: u128, base: u32) -> Vec<Digit> {
        let mut digits = Vec::new();
        while n != 0 {
            digits.push((n % base as u128) as Digit);
            n /= base as u128;
        }
        digits
    }

    proptest! {
        #[test]
        fn add_commutes_and_matches_native(x: u64, y: u64, base in 2u32..=36) {
            let xd = to_digit_vec(x as u128, base);
            let yd = to_digit_vec(y as u128, base);

            let sum = add(&xd, &yd, base);
            prop_assert_eq!(&sum, &add(&yd, &xd, base));
            prop_assert_eq!(sum, to_digit_vec(x as u128 + y as u128, base));
        }

        #[test]
        fn multiply_matches_native(n in 0i64..=0xFFFF, m: u64, base in 2u32..=36) {
            let digits = to_digit_vec(m as u128, base);
            let product = multiply_by_scalar(n, &digits, base).unwrap();
            prop_assert_eq!(product, to_digit_vec(n as u128 * m as u128, base));
        }

        #[test]
        fn multiply_by_zero_is_zero(m: u64, base in 2u32..=36) {
            let digits = to_digit_vec(m as u128, base);
            prop_assert_eq!(multiply_by_scalar(0, &digits, base).unwrap(), vec![]);
        }

        #[test]
        fn multiply_by_one_is_identity(m: u64, base in 2u32..=36) {
            let digits = to_digit_vec(m as u128, base);
            prop_assert_eq!(multiply_by_scalar(1, &digits, base).unwrap(), digits.clone());
        }

        #[test]
        fn negative_multiplier_rejected(n in i64::MIN..0, base in 2u32..=36) {
            prop_assert_eq!(
                multiply_by_scalar(n, &[1], base),
                Err(ConvertBaseError::InvalidMultiplier(n))
            );
        }
    }
}
