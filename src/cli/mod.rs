// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate passwords and check their strength", long_about = None)]
pub struct Args {
    /// Print one-shot command results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (starts the interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
