// src/generators/charset.rs
//! Character classes and pool assembly for random passwords.

use super::{GeneratorError, Result};

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to confuse when read back.
pub const AMBIGUOUS: &[u8] = b"0Ol1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }
}

/// Assembled set of characters a password is drawn from.
#[derive(Debug, Clone)]
pub struct CharPool {
    chars: Vec<u8>,
}

impl CharPool {
    /// Builds a pool from `classes` in the given order, then strips
    /// ambiguous characters if requested. Fails if nothing is left.
    pub fn from_classes(classes: &[CharClass], exclude_ambiguous: bool) -> Result<Self> {
        let mut chars = Vec::new();
        for class in classes {
            chars.extend_from_slice(class.chars());
        }

        if exclude_ambiguous {
            chars.retain(|c| !AMBIGUOUS.contains(c));
        }

        if chars.is_empty() {
            return Err(GeneratorError::EmptyPool);
        }

        Ok(Self { chars })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }
}
