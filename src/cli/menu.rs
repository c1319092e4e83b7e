// src/cli/menu.rs
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Select, Text};

use super::handlers::{format_strength, handle_check, handle_generate, handle_memorable, write_feedback};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{MemorableOptions, PasswordGenerationOptions};
use crate::utils::{parse_count, parse_opt_in, parse_opt_out};

const GENERATE: &str = "🔐  Generate password";
const MEMORABLE: &str = "🧠  Generate memorable password";
const CHECK: &str = "🔍  Check password strength";
const EXIT: &str = "❌  Exit";

const MENU: [&str; 4] = [GENERATE, MEMORABLE, CHECK, EXIT];

const FAREWELL: &str = "👋 Goodbye!";

// What the menu loop does after an action's prompt fails.
#[derive(Debug, PartialEq, Eq)]
enum PromptOutcome {
    // Esc: abandon the current action and show the menu again.
    BackToMenu,
    // Ctrl+C: leave the application.
    Exit,
    Fatal,
}

fn classify(e: &InquireError) -> PromptOutcome {
    match e {
        InquireError::OperationCanceled => PromptOutcome::BackToMenu,
        InquireError::OperationInterrupted => PromptOutcome::Exit,
        _ => PromptOutcome::Fatal,
    }
}

fn ask_yes_no(message: &str, default: bool, parser: fn(&str) -> bool) -> Result<bool, InquireError> {
    Confirm::new(message)
        .with_default(default)
        .with_parser(&|answer: &str| -> Result<bool, ()> { Ok(parser(answer)) })
        .prompt()
}

fn ask_count(message: &str, default: usize, what: &str) -> Result<Option<usize>, InquireError> {
    let answer = Text::new(message)
        .with_default(&default.to_string())
        .prompt()?;

    match parse_count(&answer, default, what) {
        Ok(count) => Ok(Some(count)),
        Err(e) => {
            log::debug!("Rejected {} input: {}", what, e);
            println!("❌ {}", e);
            Ok(None)
        }
    }
}

fn generate_random(generator: &PasswordGenerator, config: &Config) -> Result<(), InquireError> {
    let Some(length) = ask_count("Password length:", config.default_password_length, "password length")? else {
        return Ok(());
    };

    let use_uppercase = ask_yes_no("Use uppercase letters?", true, parse_opt_out)?;
    let use_digits = ask_yes_no("Use digits?", true, parse_opt_out)?;
    let use_symbols = ask_yes_no("Use symbols?", true, parse_opt_out)?;
    let exclude_ambiguous = ask_yes_no(
        "Exclude ambiguous characters (0, O, l, 1)?",
        config.default_exclude_ambiguous,
        parse_opt_in,
    )?;

    let options = PasswordGenerationOptions {
        length,
        use_uppercase,
        use_digits,
        use_symbols,
        exclude_ambiguous,
    };

    match handle_generate(generator, &options) {
        Ok(output) => {
            if let Some(password) = &output.password {
                println!("\nGenerated password: {}", password);
            }
            println!("{}", format_strength(&output.report));
        }
        Err(e) => println!("❌ Failed to generate password: {}", e),
    }
    Ok(())
}

fn generate_memorable(generator: &PasswordGenerator, config: &Config) -> Result<(), InquireError> {
    let Some(num_words) = ask_count("Number of words:", config.default_word_count, "word count")? else {
        return Ok(());
    };

    match handle_memorable(generator, &MemorableOptions { num_words }) {
        Ok(output) => {
            if let Some(password) = &output.password {
                println!("\nMemorable password: {}", password);
            }
            println!("{}", format_strength(&output.report));
        }
        Err(e) => println!("❌ Failed to generate password: {}", e),
    }
    Ok(())
}

fn check_strength() -> Result<(), InquireError> {
    let password = Password::new("Enter a password to check:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    if password.is_empty() {
        println!("❌ Password cannot be empty");
        return Ok(());
    }

    let output = handle_check(&password);
    println!("\n{}", format_strength(&output.report));
    write_feedback(&mut std::io::stdout(), &output.report).map_err(InquireError::IO)?;
    Ok(())
}

pub fn run_cli_menu(config: &Config) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🔑 PASSWORD GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let generator = PasswordGenerator::new();

    loop {
        let selection = Select::new("Choose an option:", MENU.to_vec())
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .prompt_skippable();

        let result = match selection {
            Ok(Some(GENERATE)) => generate_random(&generator, config),
            Ok(Some(MEMORABLE)) => generate_memorable(&generator, config),
            Ok(Some(CHECK)) => check_strength(),
            Ok(Some(EXIT)) => {
                println!("{}", FAREWELL);
                return Ok(());
            }
            Ok(_) => {
                println!("❌ Invalid choice. Please try again.");
                Ok(())
            }
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            match classify(&e) {
                PromptOutcome::BackToMenu => println!("↩️  Cancelled"),
                PromptOutcome::Exit => {
                    println!("{}", FAREWELL);
                    return Ok(());
                }
                PromptOutcome::Fatal => {
                    log::error!("Prompt failed: {}", e);
                    return Err(e.into());
                }
            }
        }

        println!("\n{}\n", "=".repeat(50));
    }
}
