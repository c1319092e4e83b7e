// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

// Runtime configuration for the password generator
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_word_count: usize,
    pub default_exclude_ambiguous: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 12,
            default_word_count: 4,
            default_exclude_ambiguous: false,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

impl Config {
    // Load configuration from environment variables. Invalid values keep
    // their default and are returned as warnings for the caller to log.
    pub fn load() -> (Self, Vec<String>) {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if length > 0 => config.default_password_length = length,
                _ => warnings.push(format!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val)),
            }
        }

        if let Ok(val) = env::var("DEFAULT_WORD_COUNT") {
            match val.parse::<usize>() {
                Ok(count) if count > 0 => config.default_word_count = count,
                _ => warnings.push(format!("Ignoring invalid DEFAULT_WORD_COUNT '{}'", val)),
            }
        }

        if let Ok(val) = env::var("DEFAULT_EXCLUDE_AMBIGUOUS") {
            match val.parse() {
                Ok(exclude) => config.default_exclude_ambiguous = exclude,
                Err(_) => warnings.push(format!("Ignoring invalid DEFAULT_EXCLUDE_AMBIGUOUS '{}'", val)),
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match parse_log_level(&level) {
                Some(level) => config.log_level = level,
                None => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }
}
