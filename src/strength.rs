// src/strength.rs
use crate::generators::charset::SYMBOLS;
use crate::models::{StrengthLevel, StrengthReport};

pub const MAX_SCORE: u8 = 6;

pub const MIN_LENGTH: usize = 8;
pub const LONG_LENGTH: usize = 12;

pub const ADVICE_LENGTH: &str = "increase length to at least 8";
pub const ADVICE_LOWERCASE: &str = "add lowercase letters";
pub const ADVICE_UPPERCASE: &str = "add uppercase letters";
pub const ADVICE_DIGITS: &str = "add digits";
pub const ADVICE_SYMBOLS: &str = "add special characters";

fn is_symbol(c: char) -> bool {
    c.is_ascii() && SYMBOLS.contains(&(c as u8))
}

/// Scores `password` with six additive checks. Each failing check except
/// the long-length bonus adds one advice line, in check order.
pub fn analyze_password_strength(password: &str) -> StrengthReport {
    let length = password.chars().count();

    let checks: [(bool, Option<&'static str>); 6] = [
        (length >= MIN_LENGTH, Some(ADVICE_LENGTH)),
        (password.chars().any(char::is_lowercase), Some(ADVICE_LOWERCASE)),
        (password.chars().any(char::is_uppercase), Some(ADVICE_UPPERCASE)),
        (password.chars().any(char::is_numeric), Some(ADVICE_DIGITS)),
        (password.chars().any(is_symbol), Some(ADVICE_SYMBOLS)),
        (length >= LONG_LENGTH, None),
    ];

    let mut score = 0;
    let mut feedback = Vec::new();
    for (passed, advice) in checks {
        if passed {
            score += 1;
        } else if let Some(advice) = advice {
            feedback.push(advice);
        }
    }

    log::debug!("Password scored {}/{}", score, MAX_SCORE);

    StrengthReport {
        score,
        strength: StrengthLevel::from_score(score),
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password() {
        let report = analyze_password_strength("");
        assert_eq!(report.score, 0);
        assert_eq!(report.strength, StrengthLevel::VeryWeak);
        assert_eq!(
            report.feedback,
            vec![ADVICE_LENGTH, ADVICE_LOWERCASE, ADVICE_UPPERCASE, ADVICE_DIGITS, ADVICE_SYMBOLS]
        );
    }

    #[test]
    fn test_all_but_long_length() {
        let report = analyze_password_strength("Abcdefgh1!");
        assert_eq!(report.score, 5);
        assert_eq!(report.strength, StrengthLevel::VeryStrong);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_long_lowercase_only() {
        // Length >= 8, lowercase and length >= 12 pass.
        let report = analyze_password_strength("abcdefghijkl");
        assert_eq!(report.score, 3);
        assert_eq!(report.strength, StrengthLevel::Good);
        assert_eq!(report.feedback, vec![ADVICE_UPPERCASE, ADVICE_DIGITS, ADVICE_SYMBOLS]);
    }

    #[test]
    fn test_excellent() {
        let report = analyze_password_strength("Abcdefgh1!xyz");
        assert_eq!(report.score, MAX_SCORE);
        assert_eq!(report.strength, StrengthLevel::Excellent);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_length_boundaries() {
        assert_eq!(analyze_password_strength("aaaaaaa").feedback[0], ADVICE_LENGTH);
        assert_eq!(analyze_password_strength("aaaaaaaa").score, 2);
        assert_eq!(analyze_password_strength("aaaaaaaaaaa").score, 2);
        assert_eq!(analyze_password_strength("aaaaaaaaaaaa").score, 3);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Four two-byte characters are four characters long.
        let report = analyze_password_strength("éééé");
        assert!(report.feedback.contains(&ADVICE_LENGTH));
    }

    #[test]
    fn test_non_ascii_digits_count() {
        let report = analyze_password_strength("Abcdefgh\u{0663}!");
        assert_eq!(report.score, 5);
        assert!(report.feedback.is_empty());

        let report = analyze_password_strength("abcdefgh\u{0967}");
        assert!(!report.feedback.contains(&ADVICE_DIGITS));
    }

    #[test]
    fn test_symbols_outside_the_set_do_not_count() {
        let report = analyze_password_strength("Abcdefgh1~");
        assert_eq!(report.score, 4);
        assert_eq!(report.feedback, vec![ADVICE_SYMBOLS]);
    }

    #[test]
    fn test_each_symbol_counts() {
        for &b in SYMBOLS {
            let report = analyze_password_strength(&(b as char).to_string());
            assert!(!report.feedback.contains(&ADVICE_SYMBOLS), "{}", b as char);
        }
    }

    #[test]
    fn test_appending_never_lowers_the_score() {
        let bases = ["", "a", "abc", "ABCDEFG", "1234567890", "!!!!", "Abcdefgh1!"];
        let suffixes = ["a", "Z", "7", "?", "abcdefgh", "~~~~~~"];
        for base in bases {
            let before = analyze_password_strength(base).score;
            for suffix in suffixes {
                let after = analyze_password_strength(&format!("{base}{suffix}")).score;
                assert!(after >= before, "{base:?} + {suffix:?}");
            }
        }
    }

    #[test]
    fn test_scoring_is_pure() {
        for password in ["", "hunter2", "Correct-Horse-Battery-Staple-9"] {
            assert_eq!(analyze_password_strength(password), analyze_password_strength(password));
        }
    }
}
