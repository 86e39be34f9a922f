//! Benchmarks for conversion operations

extern crate bigradix;
extern crate criterion;
extern crate oorandom;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bigradix::{convert_base, dec_to_hex, hex_to_dec};

mod common;
use common::*;

criterion_main!(conversion);

criterion_group!(
    name = conversion;
    config = Criterion::default().sample_size(300);
    targets =
        bench_dec_to_hex,
        bench_hex_to_dec,
        bench_decimal_to_base36,
);


fn bench_dec_to_hex(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(2375423);
    let inputs: Vec<String> = (0..200).map(|_| random_numeral(&mut rng, 10, 40)).collect();
    let mut input = RandomIterator::new(&inputs, 1157);

    c.bench_function("dec-to-hex-40-digits", |b| {
        b.iter(|| dec_to_hex(black_box(input.next())).unwrap())
    });
}

fn bench_hex_to_dec(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(5716);
    let inputs: Vec<String> = (0..200).map(|_| random_numeral(&mut rng, 16, 32)).collect();
    let mut input = RandomIterator::new(&inputs, 90225);

    c.bench_function("hex-to-dec-32-digits", |b| {
        b.iter(|| hex_to_dec(black_box(input.next())).unwrap())
    });
}

fn bench_decimal_to_base36(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(480291);
    let inputs: Vec<String> = (0..200).map(|_| random_numeral(&mut rng, 10, 100)).collect();
    let mut input = RandomIterator::new(&inputs, 33);

    c.bench_function("dec-to-base36-100-digits", |b| {
        b.iter(|| convert_base(black_box(input.next()), 10, 36).unwrap())
    });
}
