// src/generators/password.rs
use rand::{CryptoRng, Rng};

use super::charset::{CharClass, CharPool};
use super::{GeneratorError, Result};
use crate::models::PasswordGenerationOptions;

/// Character classes enabled by `options`, lowercase first.
fn selected_classes(options: &PasswordGenerationOptions) -> Vec<CharClass> {
    let mut classes = vec![CharClass::Lowercase];
    if options.use_uppercase {
        classes.push(CharClass::Uppercase);
    }
    if options.use_digits {
        classes.push(CharClass::Digits);
    }
    if options.use_symbols {
        classes.push(CharClass::Symbols);
    }
    classes
}

/// Draws `options.length` characters uniformly, with replacement, from the
/// pool the options describe. No per-class minimum is enforced.
pub fn generate<R>(rng: &mut R, options: &PasswordGenerationOptions) -> Result<String>
where
    R: Rng + CryptoRng,
{
    if options.length == 0 {
        return Err(GeneratorError::InvalidConfiguration(
            "password length must be at least 1".to_string(),
        ));
    }

    let pool = CharPool::from_classes(&selected_classes(options), options.exclude_ambiguous)?;

    let chars = pool.as_bytes();
    let password = (0..options.length)
        .map(|_| char::from(chars[rng.gen_range(0..chars.len())]))
        .collect();

    Ok(password)
}
