//! Asset discovery.
//!
//! Scans the user preset tree for candidate files, one pass per kind. Each
//! kind owns a subdirectory (`LFOs/`, `Presets/`, ...) and only regular
//! files carrying that kind's registered extension are considered. Matching
//! files are parsed as JSON and turned into [`Asset`]s; the parsed document
//! and the file's stem feed name resolution.

use std::fs;
use std::path::Path;

use log::{debug, info};
use walkdir::WalkDir;

use crate::asset::{Asset, AssetKind};
use crate::error::{BankrollError, Result};

/// Scan `user_dir` and construct an asset for every matching file.
///
/// A missing per-kind subdirectory is skipped, not an error: a user who has
/// never saved a wavetable simply has no `Wavetables/` directory. Unreadable
/// or unparseable files are propagated as errors.
pub fn discover_assets(user_dir: &Path) -> Result<Vec<Asset>> {
    let mut assets = Vec::new();

    for kind in AssetKind::ALL {
        let subdir = user_dir.join(kind.directory());
        if !subdir.is_dir() {
            debug!("No {} directory at {}, skipping", kind, subdir.display());
            continue;
        }

        for entry in WalkDir::new(&subdir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| BankrollError::FileRead {
                path: subdir.clone(),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let matches_kind = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == kind.extension());
            if !matches_kind {
                continue;
            }

            debug!("Reading {} from {}", kind, path.display());
            let content = fs::read_to_string(path).map_err(|e| BankrollError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
            let document = serde_json::from_str(&content)?;

            assets.push(Asset::new(kind, document, Some(path), None)?);
        }
    }

    info!("Discovered {} assets under {}", assets.len(), user_dir.display());
    Ok(assets)
}
