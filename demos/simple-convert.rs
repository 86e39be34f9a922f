extern crate bigradix;
use bigradix::*;

fn main() {
    println!("Hello, big radix conversions!");

    // the classic precision trap: this value does not survive a trip
    // through f64, but digit vectors carry it exactly
    let input = "18446744073709551615";
    let hex = dec_to_hex(input).unwrap();
    println!("{} in hex: {}", input, hex);

    let back = hex_to_dec(&hex).unwrap();
    println!("{} back in decimal: {}", hex, back);

    let ternary = convert_base(input, 10, 3).unwrap();
    println!("{} in ternary: {}", input, ternary);

    let bits = match convert_base("cafe", 16, 2) {
        Ok(bits) => bits,
        Err(e) => panic!("0xcafe should convert: {}", e),
    };
    println!("0xcafe in binary: {}", bits);

    match dec_to_hex("not-a-number") {
        Ok(hex) => println!("unexpected success: {}", hex),
        Err(e) => println!("rejected as expected: {}", e),
    }

    let digits = parse_digits("1024", 10).unwrap();
    println!("digit vector of 1024 (least significant first): {:?}", digits);
    println!("rendered back: {}", format_digits(&digits, 10));
}
