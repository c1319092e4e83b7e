// src/utils/input.rs
use crate::generators::{GeneratorError, Result};

/// Parses a positive count typed at a prompt. Blank input takes `default`.
pub fn parse_count(input: &str, default: usize, what: &str) -> Result<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    match input.parse::<usize>() {
        Ok(0) => Err(GeneratorError::InvalidConfiguration(format!(
            "{} must be at least 1",
            what
        ))),
        Ok(count) => Ok(count),
        Err(_) => Err(GeneratorError::InvalidConfiguration(format!(
            "{} must be a whole number, got '{}'",
            what, input
        ))),
    }
}

/// Yes unless the answer is explicitly "n".
pub fn parse_opt_out(answer: &str) -> bool {
    !answer.trim().eq_ignore_ascii_case("n")
}

/// No unless the answer is explicitly "y".
pub fn parse_opt_in(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
