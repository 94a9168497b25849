//! Suitability scoring between one destination key and one driver key.
//!
//! The score is asymmetric: the destination key's length parity selects the
//! base formula, while the driver key's content sets the magnitude. A shared
//! length factor multiplies the base by 1.5.

const VOWELS: &str = "aeiou";

/// Multiplier applied to the vowel count when the destination key length is
/// even.
const VOWEL_WEIGHT: f64 = 1.5;

/// Multiplier applied when the two key lengths share a common factor ≥ 2.
const COMMON_FACTOR_BONUS: f64 = 1.5;

/// Count the vowels (`aeiou`) in a key.
pub fn count_vowels(key: &str) -> usize {
    key.chars().filter(|c| VOWELS.contains(*c)).count()
}

/// Count the characters in a key that are not vowels.
///
/// This is "not a vowel", not "is a letter": digits or punctuation that
/// survive normalization count too.
pub fn count_consonants(key: &str) -> usize {
    key.chars().filter(|c| !VOWELS.contains(*c)).count()
}

/// Common integer factors of `x` and `y`, excluding 1, in ascending order.
///
/// The candidate range is `2..=min(x, y)`, so any operand below 2 yields an
/// empty result.
pub fn common_factors(x: usize, y: usize) -> Vec<usize> {
    (2..=x.min(y)).filter(|f| x % f == 0 && y % f == 0).collect()
}

/// Base suitability score, gated by the destination key's length parity:
/// even → 1.5 × vowel count of the driver key, odd → non-vowel count of the
/// driver key.
pub fn base_suitability(destination_key: &str, driver_key: &str) -> f64 {
    if destination_key.chars().count() % 2 == 0 {
        count_vowels(driver_key) as f64 * VOWEL_WEIGHT
    } else {
        count_consonants(driver_key) as f64
    }
}

/// Full suitability score: the base score, multiplied by 1.5 when the two
/// key lengths share any common factor ≥ 2.
pub fn suitability_score(destination_key: &str, driver_key: &str) -> f64 {
    let base = base_suitability(destination_key, driver_key);
    let len_destination = destination_key.chars().count();
    let len_driver = driver_key.chars().count();
    if common_factors(len_destination, len_driver).is_empty() {
        base
    } else {
        base * COMMON_FACTOR_BONUS
    }
}
