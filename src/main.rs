//! Bankroll CLI - Vital Preset Bank Packager
//!
//! Command-line interface for packaging Vital preset banks.

use clap::Parser;
use env_logger::Env;
use log::info;

use bankroll::cli::{commands, Cli, Commands};
use bankroll::Result;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Bankroll v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Pack) => commands::pack(&cli.config),
        Some(Commands::List) => commands::list(&cli.config),
        None => commands::pack(&cli.config),
    }
}
