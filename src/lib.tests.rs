// Tests of base conversion, to be included by lib.rs

mod convert_base_tests {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $from:literal -> $to:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let result = convert_base($input, $from, $to).unwrap();
                assert_eq!(result, $expected);
            }
        };
    }

    impl_case!(case_255_10_16: "255", 10 -> 16 => "ff");
    impl_case!(case_ff_16_10: "ff", 16 -> 10 => "255");
    impl_case!(case_1024_10_16: "1024", 10 -> 16 => "400");
    impl_case!(case_400_16_10: "400", 16 -> 10 => "1024");
    impl_case!(case_0_10_16: "0", 10 -> 16 => "0");
    impl_case!(case_empty_10_16: "", 10 -> 16 => "0");
    impl_case!(case_identity_base: "123456789", 10 -> 10 => "123456789");
    impl_case!(case_leading_zeros_dropped: "007", 10 -> 10 => "7");
    impl_case!(case_leading_zeros_hex: "00ff", 16 -> 10 => "255");
    impl_case!(case_ff_16_2: "ff", 16 -> 2 => "11111111");
    impl_case!(case_11111111_2_16: "11111111", 2 -> 16 => "ff");
    impl_case!(case_zz_36_10: "zz", 36 -> 10 => "1295");
    impl_case!(case_255_10_2: "255", 10 -> 2 => "11111111");

    // value exceeding native 64-bit precision
    impl_case!(case_u64_max_10_16: "18446744073709551615", 10 -> 16 => "ffffffffffffffff");
    impl_case!(case_u64_max_16_10: "ffffffffffffffff", 16 -> 10 => "18446744073709551615");
    impl_case!(case_u64_max_plus_one: "18446744073709551616", 10 -> 16 => "10000000000000000");
    impl_case!(case_u128_max_10_16:
        "340282366920938463463374607431768211455", 10 -> 16
        => "ffffffffffffffffffffffffffffffff");

    #[test]
    fn case_roundtrip_past_u128() {
        let input = "123456789012345678901234567890123456789012345678901234567890";
        let hex = convert_base(input, 10, 16).unwrap();
        let back = convert_base(&hex, 16, 10).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn case_roundtrip_through_base3() {
        let input = "deadbeef";
        let ternary = convert_base(input, 16, 3).unwrap();
        let back = convert_base(&ternary, 3, 16).unwrap();
        assert_eq!(back, input);
    }
}

mod convert_base_error_tests {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $from:literal -> $to:literal) => {
            #[test]
            #[should_panic(expected = "InvalidDigit")]
            fn $name() {
                convert_base($input, $from, $to).unwrap();
            }
        };
    }

    impl_case!(case_hex_digit_in_decimal: "12f3", 10 -> 16);
    impl_case!(case_not_a_numeral: "hello", 16 -> 10);
    impl_case!(case_2_in_binary: "102", 2 -> 10);

    #[test]
    fn case_error_carries_base() {
        let err = convert_base("12f3", 10, 16).unwrap_err();
        assert_eq!(err, ConvertBaseError::InvalidDigit { ch: 'f', base: 10 });
    }
}

mod wrapper_tests {
    use super::*;

    #[test]
    fn dec_to_hex_1024() {
        assert_eq!(dec_to_hex("1024").unwrap(), "0x400");
    }

    #[test]
    fn dec_to_hex_255() {
        assert_eq!(dec_to_hex("255").unwrap(), "0xff");
    }

    #[test]
    fn dec_to_hex_zero() {
        assert_eq!(dec_to_hex("0").unwrap(), "0x0");
    }

    #[test]
    fn dec_to_hex_u64_max() {
        assert_eq!(
            dec_to_hex("18446744073709551615").unwrap(),
            "0xffffffffffffffff",
        );
    }

    #[test]
    fn dec_to_hex_rejects_hex_digits() {
        let err = dec_to_hex("ff").unwrap_err();
        assert_eq!(err, ConvertBaseError::InvalidDigit { ch: 'f', base: 10 });
    }

    #[test]
    fn hex_to_dec_with_prefix() {
        assert_eq!(hex_to_dec("0x400").unwrap(), "1024");
    }

    #[test]
    fn hex_to_dec_uppercase_prefix() {
        assert_eq!(hex_to_dec("0X400").unwrap(), "1024");
    }

    #[test]
    fn hex_to_dec_no_prefix_mixed_case() {
        assert_eq!(hex_to_dec("FF").unwrap(), "255");
        assert_eq!(hex_to_dec("fF").unwrap(), "255");
    }

    #[test]
    fn hex_to_dec_prefix_only_is_zero() {
        assert_eq!(hex_to_dec("0x").unwrap(), "0");
    }

    #[test]
    fn hex_to_dec_rejects_non_hex() {
        let err = hex_to_dec("0xfg").unwrap_err();
        assert_eq!(err, ConvertBaseError::InvalidDigit { ch: 'g', base: 16 });
    }

    #[test]
    fn wrappers_roundtrip() {
        let dec = "112233445566778899112233445566778899";
        let hex = dec_to_hex(dec).unwrap();
        assert_eq!(hex_to_dec(&hex).unwrap(), dec);
    }
}

mod error_display_tests {
    use super::*;

    #[test]
    fn invalid_digit_display() {
        let err = ConvertBaseError::InvalidDigit { ch: 'g', base: 16 };
        assert_eq!(format!("{}", err), "invalid digit 'g' for base 16");
    }

    #[test]
    fn invalid_multiplier_display() {
        let err = ConvertBaseError::InvalidMultiplier(-7);
        assert_eq!(format!("{}", err), "invalid (negative) multiplier -7");
    }
}
