// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

// Random password generation options. Lowercase is always included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub use_uppercase: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            use_uppercase: true,
            use_digits: true,
            use_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorableOptions {
    pub num_words: usize,
}

impl Default for MemorableOptions {
    fn default() -> Self {
        Self { num_words: 4 }
    }
}

/// Ordinal strength scale, one level per possible score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Good,
    Strong,
    VeryStrong,
    Excellent,
}

impl StrengthLevel {
    /// Maps a score to its level. Scores above the maximum saturate.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLevel::VeryWeak,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Medium,
            3 => StrengthLevel::Good,
            4 => StrengthLevel::Strong,
            5 => StrengthLevel::VeryStrong,
            _ => StrengthLevel::Excellent,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "very weak",
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Good => "good",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very strong",
            StrengthLevel::Excellent => "excellent",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    pub strength: StrengthLevel,
    pub feedback: Vec<&'static str>,
}
