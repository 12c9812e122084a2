//! Primitive value generators.
//!
//! Pure functions over a caller-supplied RNG. Each call consumes entropy
//! and nothing else; there is no shared state between calls.

use crate::synthesizer::GeneratorError;
use rand::Rng;

/// Generate a random integer with exactly `digit_count` decimal digits,
/// drawn uniformly from `[10^(n-1), 10^n - 1]`.
///
/// `digit_count` must be between 1 and 18; 19 digits would overflow the
/// upper bound of an `i64`.
pub fn random_digits_int<R: Rng>(rng: &mut R, digit_count: u32) -> Result<i64, GeneratorError> {
    if !(1..=18).contains(&digit_count) {
        return Err(GeneratorError::InvalidDigitCount(digit_count));
    }

    let low = 10_i64.pow(digit_count - 1);
    let high = 10_i64.pow(digit_count) - 1;
    Ok(rng.gen_range(low..=high))
}

/// Generate a random float drawn uniformly from `[min, max]`, rounded to
/// `decimals` fractional digits.
///
/// Rounding is half-away-from-zero (`f64::round` semantics).
pub fn random_float<R: Rng>(
    rng: &mut R,
    min: f64,
    max: f64,
    decimals: u32,
) -> Result<f64, GeneratorError> {
    if min > max {
        return Err(GeneratorError::InvalidRange { min, max });
    }

    let raw = rng.gen_range(min..=max);
    let factor = 10_f64.powi(decimals as i32);
    Ok((raw * factor).round() / factor)
}

/// Generate a random string of exactly `length` characters, each drawn
/// independently and uniformly from `alphabet`.
pub fn random_text<R: Rng>(
    rng: &mut R,
    length: usize,
    alphabet: &[char],
) -> Result<String, GeneratorError> {
    if alphabet.is_empty() {
        return Err(GeneratorError::EmptyAlphabet);
    }

    Ok((0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect())
}

/// Generate `true` or `false` with equal probability.
pub fn random_bool<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}
