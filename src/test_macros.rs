// file to be included in tests modules

/// Borrow a list of digit literals as a `&[Digit]`, least significant first
macro_rules! digit_slice {
    ( $($d:literal),* $(,)? ) => {{
        let digits: &[crate::Digit] = &[ $($d),* ];
        digits
    }};
}
