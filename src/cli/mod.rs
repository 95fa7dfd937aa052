//! CLI Module
//!
//! Command-line interface for the bankroll packaging pipeline.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bankroll - package Vital preset assets into bank archives
#[derive(Parser, Debug)]
#[command(name = "bankroll")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "config.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan, group, and write one archive per bank
    #[command(name = "pack")]
    Pack,

    /// Scan and group, printing the banks without writing archives
    #[command(name = "list")]
    List,
}
