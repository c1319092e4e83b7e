// src/generators/mod.rs
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use thiserror::Error;

pub mod charset;
pub mod memorable;
pub mod password;

pub use memorable::generate_memorable;
pub use password::generate;

use crate::models::{MemorableOptions, PasswordGenerationOptions};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Character pool is empty after applying the selected options")]
    EmptyPool,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl CryptoRng + Rng {
    OsRng
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        log::debug!(
            "Generating random password (length={}, uppercase={}, digits={}, symbols={}, exclude_ambiguous={})",
            options.length,
            options.use_uppercase,
            options.use_digits,
            options.use_symbols,
            options.exclude_ambiguous,
        );
        generate(&mut csprng(), options)
    }

    pub fn generate_memorable(&self, options: &MemorableOptions) -> Result<String> {
        log::debug!("Generating memorable password (words={})", options.num_words);
        generate_memorable(&mut csprng(), options.num_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_uses_os_rng() {
        let generator = PasswordGenerator::new();
        let password = generator
            .generate_password(&PasswordGenerationOptions::default())
            .unwrap();
        assert_eq!(password.chars().count(), 12);

        let memorable = generator
            .generate_memorable(&MemorableOptions::default())
            .unwrap();
        assert!(memorable.ends_with(|c: char| c.is_ascii_digit()));
    }

    #[test]
    fn test_facade_propagates_errors() {
        let generator = PasswordGenerator::new();
        let options = PasswordGenerationOptions {
            length: 0,
            ..Default::default()
        };
        assert!(matches!(
            generator.generate_password(&options),
            Err(GeneratorError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            generator.generate_memorable(&MemorableOptions { num_words: 0 }),
            Err(GeneratorError::InvalidConfiguration(_))
        ));
    }
}
