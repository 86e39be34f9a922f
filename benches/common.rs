//! common routines to be included by benches

/// Build a random numeral string in the given base
///
/// The leading digit is never zero.
pub fn random_numeral(rng: &mut oorandom::Rand32, base: u32, digit_count: usize) -> String {
    let mut numeral = String::with_capacity(digit_count);
    numeral.push(char::from_digit(rng.rand_range(1..base), 36).unwrap());
    for _ in 1..digit_count {
        numeral.push(char::from_digit(rng.rand_range(0..base), 36).unwrap());
    }
    numeral
}

/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a Vec<T>,
    rng: oorandom::Rand32,
}

impl<'a, T> RandomIterator<'a, T> {
    pub fn new(v: &'a Vec<T>, seed: u64) -> Self {
        Self {
            v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> &'a T {
        let idx = self.rng.rand_range(0..self.v.len() as u32) as usize;
        &self.v[idx]
    }
}
