// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a random password
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH or 12)
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Remove easily confused characters (0, O, l, 1)
        #[arg(long, conflicts_with = "include_ambiguous")]
        exclude_ambiguous: bool,

        /// Keep easily confused characters even if DEFAULT_EXCLUDE_AMBIGUOUS is set
        #[arg(long)]
        include_ambiguous: bool,
    },

    /// Generate a password from dictionary words
    Memorable {
        /// Number of words (defaults to DEFAULT_WORD_COUNT or 4)
        #[arg(long, short)]
        words: Option<usize>,
    },

    /// Check the strength of a password
    Check {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },
}
