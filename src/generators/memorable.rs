// src/generators/memorable.rs
use rand::{CryptoRng, Rng};

use super::{GeneratorError, Result};

pub const WORDS: [&str; 24] = [
    "apple", "banana", "cherry", "dragon", "eagle", "forest", "guitar", "house",
    "island", "jungle", "kitchen", "lion", "mountain", "ocean", "piano", "queen",
    "river", "sunset", "tiger", "universe", "village", "window", "yellow", "zebra",
];

/// Exclusive upper bound of the numeric suffix.
pub const SUFFIX_BOUND: u32 = 100;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Concatenates `num_words` capitalized words drawn with replacement from
/// [`WORDS`], followed by an unpadded number in `0..SUFFIX_BOUND`.
pub fn generate_memorable<R>(rng: &mut R, num_words: usize) -> Result<String>
where
    R: Rng + CryptoRng,
{
    if num_words == 0 {
        return Err(GeneratorError::InvalidConfiguration(
            "word count must be at least 1".to_string(),
        ));
    }

    let mut password = String::new();
    for _ in 0..num_words {
        let word = WORDS[rng.gen_range(0..WORDS.len())];
        password.push_str(&capitalize(word));
    }

    let suffix = rng.gen_range(0..SUFFIX_BOUND);
    password.push_str(&suffix.to_string());

    Ok(password)
}
