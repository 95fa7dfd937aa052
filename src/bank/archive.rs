//! Bank archive serialization.
//!
//! A bank serializes to a ZIP container whose internal layout the consuming
//! synth re-imports directly: a top-level directory named after the bank,
//! one subdirectory per asset kind, and one UTF-8 JSON file per member at
//! `{bank}/{kind directory}/{member}.{kind extension}`. Entries are stored
//! deflate-compressed at the highest level; compression is a storage choice,
//! the entries must simply round-trip exactly.

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use log::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::bank::{Bank, BANK_EXTENSION};
use crate::error::{BankrollError, Result};

impl Bank {
    /// Serialize the bank to archive bytes.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        {
            let mut archive = ZipWriter::new(Cursor::new(&mut buffer));
            let options = SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(9));

            for (_, asset) in self.iter() {
                let entry = format!(
                    "{}/{}/{}.{}",
                    self.name(),
                    asset.kind_directory(),
                    asset.name(),
                    asset.kind_extension()
                );
                debug!("Archiving {}", entry);
                archive.start_file(&entry, options)?;
                archive.write_all(asset.document_text()?.as_bytes())?;
            }

            archive.finish()?;
        }
        Ok(buffer)
    }

    /// Write the bank archive to `{dir}/{bank}.vitalbank`.
    ///
    /// A pre-existing archive with the same name is overwritten; there is
    /// no merge and no backup.
    pub fn write_file(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(format!("{}.{}", self.name(), BANK_EXTENSION));
        let bytes = self.serialize()?;

        fs::write(&path, bytes).map_err(|e| BankrollError::FileWrite {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }
}
