// src/cli/handlers.rs
use console::style;
use serde::Serialize;
use std::io::Write;

use super::CliCommand;
use crate::core::config::Config;
use crate::generators::{self, PasswordGenerator};
use crate::models::{MemorableOptions, PasswordGenerationOptions, StrengthLevel, StrengthReport};
use crate::strength::{analyze_password_strength, MAX_SCORE};

// Result of a one-shot command, printed as text or JSON
#[derive(Debug, Serialize)]
pub struct CommandOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(flatten)]
    pub report: StrengthReport,
}

pub fn handle_generate(
    generator: &PasswordGenerator,
    options: &PasswordGenerationOptions,
) -> generators::Result<CommandOutput> {
    let password = generator.generate_password(options)?;
    let report = analyze_password_strength(&password);
    log::info!("Generated random password scoring {}/{}", report.score, MAX_SCORE);
    Ok(CommandOutput {
        password: Some(password),
        report,
    })
}

pub fn handle_memorable(
    generator: &PasswordGenerator,
    options: &MemorableOptions,
) -> generators::Result<CommandOutput> {
    let password = generator.generate_memorable(options)?;
    let report = analyze_password_strength(&password);
    log::info!("Generated memorable password scoring {}/{}", report.score, MAX_SCORE);
    Ok(CommandOutput {
        password: Some(password),
        report,
    })
}

pub fn handle_check(password: &str) -> CommandOutput {
    CommandOutput {
        password: None,
        report: analyze_password_strength(password),
    }
}

fn styled_level(level: StrengthLevel) -> String {
    let label = level.label();
    match level {
        StrengthLevel::VeryWeak | StrengthLevel::Weak => style(label).red().to_string(),
        StrengthLevel::Medium | StrengthLevel::Good => style(label).yellow().to_string(),
        _ => style(label).green().to_string(),
    }
}

/// "Strength: <label> (<score>/6)"
pub fn format_strength(report: &StrengthReport) -> String {
    format!(
        "Strength: {} ({}/{})",
        styled_level(report.strength),
        report.score,
        MAX_SCORE
    )
}

pub fn write_feedback(out: &mut impl Write, report: &StrengthReport) -> std::io::Result<()> {
    if !report.feedback.is_empty() {
        writeln!(out, "Recommendations:")?;
        for tip in &report.feedback {
            writeln!(out, "  • {}", tip)?;
        }
    }
    Ok(())
}

pub fn render(out: &mut impl Write, output: &CommandOutput, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, output)?;
        writeln!(out)?;
        return Ok(());
    }

    match &output.password {
        Some(password) => {
            writeln!(out, "Generated password: {}", password)?;
            writeln!(out, "{}", format_strength(&output.report))?;
        }
        None => {
            writeln!(out, "{}", format_strength(&output.report))?;
            write_feedback(out, &output.report)?;
        }
    }
    Ok(())
}

// Explicit flags win over the configured default.
fn resolve_exclude_ambiguous(exclude: bool, include: bool, config: &Config) -> bool {
    match (exclude, include) {
        (true, _) => true,
        (_, true) => false,
        _ => config.default_exclude_ambiguous,
    }
}

pub fn run_command(command: CliCommand, config: &Config, json: bool) -> anyhow::Result<()> {
    let generator = PasswordGenerator::new();

    let output = match command {
        CliCommand::Generate {
            length,
            no_uppercase,
            no_digits,
            no_symbols,
            exclude_ambiguous,
            include_ambiguous,
        } => {
            let options = PasswordGenerationOptions {
                length: length.unwrap_or(config.default_password_length),
                use_uppercase: !no_uppercase,
                use_digits: !no_digits,
                use_symbols: !no_symbols,
                exclude_ambiguous: resolve_exclude_ambiguous(exclude_ambiguous, include_ambiguous, config),
            };
            handle_generate(&generator, &options)?
        }
        CliCommand::Memorable { words } => {
            let options = MemorableOptions {
                num_words: words.unwrap_or(config.default_word_count),
            };
            handle_memorable(&generator, &options)?
        }
        CliCommand::Check { password } => handle_check(&password),
    };

    let stdout = std::io::stdout();
    render(&mut stdout.lock(), &output, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;

    fn rendered(output: &CommandOutput, json: bool) -> String {
        let mut buf = Vec::new();
        render(&mut buf, output, json).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_handle_generate_scores_password() {
        let output = handle_generate(&PasswordGenerator::new(), &PasswordGenerationOptions::default()).unwrap();
        let password = output.password.as_deref().unwrap();
        assert_eq!(password.chars().count(), 12);
        assert_eq!(output.report, analyze_password_strength(password));
    }

    #[test]
    fn test_handle_memorable_scores_password() {
        let output = handle_memorable(&PasswordGenerator::new(), &MemorableOptions { num_words: 2 }).unwrap();
        let password = output.password.as_deref().unwrap();
        assert_eq!(output.report, analyze_password_strength(password));
    }

    #[test]
    fn test_handle_generate_rejects_zero_length() {
        let options = PasswordGenerationOptions {
            length: 0,
            ..Default::default()
        };
        assert!(matches!(
            handle_generate(&PasswordGenerator::new(), &options),
            Err(GeneratorError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_ambiguous_flags_override_config_default() {
        let excluding = Config {
            default_exclude_ambiguous: true,
            ..Config::default()
        };
        assert!(resolve_exclude_ambiguous(false, false, &excluding));
        assert!(!resolve_exclude_ambiguous(false, true, &excluding));

        let keeping = Config::default();
        assert!(!resolve_exclude_ambiguous(false, false, &keeping));
        assert!(resolve_exclude_ambiguous(true, false, &keeping));
    }

    #[test]
    fn test_render_check_text() {
        let text = rendered(&handle_check("abcdefghijkl"), false);
        assert!(text.contains("good"));
        assert!(text.contains("(3/6)"));
        assert!(text.contains("Recommendations:"));
        assert!(text.contains("  • add uppercase letters"));
        assert!(text.contains("  • add digits"));
        assert!(text.contains("  • add special characters"));
        assert!(!text.contains("Generated password"));
    }

    #[test]
    fn test_render_check_without_feedback() {
        let text = rendered(&handle_check("Abcdefgh1!"), false);
        assert!(text.contains("(5/6)"));
        assert!(!text.contains("Recommendations:"));
    }

    #[test]
    fn test_render_generated_text() {
        let output = CommandOutput {
            password: Some("Abcdefgh1!".to_string()),
            report: analyze_password_strength("Abcdefgh1!"),
        };
        let text = rendered(&output, false);
        assert!(text.starts_with("Generated password: Abcdefgh1!\n"));
        assert!(text.contains("very strong"));
    }

    #[test]
    fn test_render_json() {
        let value: serde_json::Value = serde_json::from_str(&rendered(&handle_check(""), true)).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["score"], 0);
        assert_eq!(value["strength"], "very_weak");
        assert_eq!(value["feedback"].as_array().unwrap().len(), 5);

        let output = CommandOutput {
            password: Some("Zebra42".to_string()),
            report: analyze_password_strength("Zebra42"),
        };
        let value: serde_json::Value = serde_json::from_str(&rendered(&output, true)).unwrap();
        assert_eq!(value["password"], "Zebra42");
    }
}
