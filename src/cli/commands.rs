//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;

use crate::config::Config;
use crate::discovery::discover_assets;
use crate::error::Result;
use crate::pipeline::{group_assets, render_report, write_banks};

/// Scan the user library, group bank-scoped assets, and write one archive
/// per bank.
pub fn pack(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    info!("Packing banks from {}", config.user_dir().display());

    let assets = discover_assets(&config.user_dir())?;
    let registry = group_assets(assets, &config.delimiter)?;

    print!("{}", render_report(&registry));

    let written = write_banks(&registry, &config.bank_output_dir())?;
    for path in &written {
        println!("Wrote {}", path.display());
    }

    if written.is_empty() {
        println!("No bank-scoped assets found.");
    }

    Ok(())
}

/// Scan and group, printing the banks without writing anything.
pub fn list(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    info!("Listing banks under {}", config.user_dir().display());

    let assets = discover_assets(&config.user_dir())?;
    let registry = group_assets(assets, &config.delimiter)?;

    if registry.is_empty() {
        println!("No bank-scoped assets found.");
        return Ok(());
    }

    print!("{}", render_report(&registry));

    Ok(())
}
