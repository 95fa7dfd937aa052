//! Batch packaging pipeline.
//!
//! Single-pass orchestration: classify every discovered asset, collect the
//! bank-scoped ones into a [`BankRegistry`], then write one archive per
//! bank. Standalone assets (no delimiter in the name) are dropped from the
//! run entirely.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::asset::Asset;
use crate::bank::BankRegistry;
use crate::error::{BankrollError, Result};
use crate::grouping::{classify, BankScope};

/// Group assets into banks by their delimited names.
///
/// Each bank-scoped asset is renamed to its clean member name before
/// insertion, so the bank's keys and the serialized documents agree. An
/// ambiguous name aborts the whole pass.
pub fn group_assets(assets: Vec<Asset>, delimiter: &str) -> Result<BankRegistry> {
    let mut registry = BankRegistry::new();

    for mut asset in assets {
        match classify(&asset, delimiter)? {
            BankScope::Standalone => continue,
            BankScope::Member { bank, member } => {
                asset.rename(&member);
                registry.get_or_create(&bank).add(asset)?;
            }
        }
    }

    info!("Grouped assets into {} banks", registry.len());
    Ok(registry)
}

/// Write one archive per bank into `out_dir`, creating it if absent.
///
/// Returns the written archive paths in bank-name order.
pub fn write_banks(registry: &BankRegistry, out_dir: &Path) -> Result<Vec<PathBuf>> {
    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(|e| BankrollError::DirectoryCreateError {
            path: out_dir.to_path_buf(),
            source: e,
        })?;
    }

    let mut written = Vec::with_capacity(registry.len());
    for bank in registry.iter() {
        info!("Writing bank {}", bank.name());
        written.push(bank.write_file(out_dir)?);
    }

    Ok(written)
}

/// Render the registry as a human-readable listing: bank name, then each
/// kind with its member names indented beneath it.
pub fn render_report(registry: &BankRegistry) -> String {
    let mut report = String::new();

    for bank in registry.iter() {
        report.push_str(bank.name());
        report.push('\n');

        let mut last_kind = None;
        for (kind, asset) in bank.iter() {
            if last_kind != Some(kind) {
                report.push_str(&format!("\t{}\n", kind));
                last_kind = Some(kind);
            }
            report.push_str(&format!("\t\t{}\n", asset));
        }
    }

    report
}
