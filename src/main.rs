use clap::Parser;
use std::path::Path;

mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod strength;
mod utils;

use crate::cli::Args;
use crate::core::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, warnings) = Config::load();
    logging::init(&config)?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    ctrlc::set_handler(|| {
        log::info!("Ctrl+C received, exiting");
        println!("\n👋 Goodbye!");
        std::process::exit(0);
    })?;

    match args.command {
        Some(command) => cli::handlers::run_command(command, &config, args.json),
        None => cli::menu::run_cli_menu(&config),
    }
}
