//! Asset model.
//!
//! An [`Asset`] is one typed, named preset component: an LFO shape, a patch
//! preset, a wavetable, or a skin. The payload is the parsed JSON document
//! exactly as it sits on disk; this module never touches storage itself.
//!
//! The display name is the join key for all grouping, so its origin matters.
//! Three sources can supply it, consulted in strict priority order at
//! construction time:
//!
//! 1. a `name` field embedded in the document itself,
//! 2. the stem of the source file the document was read from,
//! 3. an explicitly supplied name.
//!
//! If none applies, construction fails rather than inventing a name.

pub mod kind;

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{BankrollError, Result};

pub use kind::{AssetKind, KindInfo, KIND_REGISTRY};

/// A typed, named, renamable preset document.
#[derive(Debug, Clone)]
pub struct Asset {
    kind: AssetKind,
    name: String,
    document: Value,
    source_path: Option<PathBuf>,
    name_is_embedded: bool,
    modified: bool,
}

impl Asset {
    /// Create an asset from an already-parsed document.
    ///
    /// The name is resolved from exactly one source: the document's own
    /// `name` field if present, else the source path's file stem, else
    /// `explicit_name`. Fails with [`BankrollError::NameResolution`] when
    /// none of the three yields a name.
    pub fn new(
        kind: AssetKind,
        document: Value,
        source_path: Option<&Path>,
        explicit_name: Option<&str>,
    ) -> Result<Asset> {
        let embedded = document
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);
        let name_is_embedded = embedded.is_some();

        let name = match embedded {
            Some(name) => name,
            None => match source_path.and_then(file_stem) {
                Some(stem) => stem,
                None => match explicit_name {
                    Some(name) => name.to_string(),
                    None => return Err(BankrollError::NameResolution { kind }),
                },
            },
        };

        Ok(Asset {
            kind,
            name,
            document,
            source_path: source_path.map(Path::to_path_buf),
            name_is_embedded,
            modified: false,
        })
    }

    /// The asset's kind.
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// The current display/lookup name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The document payload.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Where the document was read from, if it came from disk.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Whether the name lives inside the document itself.
    pub fn name_is_embedded(&self) -> bool {
        self.name_is_embedded
    }

    /// Whether the asset has been renamed since construction.
    pub fn modified(&self) -> bool {
        self.modified
    }

    /// File extension for this asset's kind.
    pub fn kind_extension(&self) -> &'static str {
        self.kind.extension()
    }

    /// Library/archive subdirectory for this asset's kind.
    pub fn kind_directory(&self) -> &'static str {
        self.kind.directory()
    }

    /// Rename the asset.
    ///
    /// When the name is embedded, the document's `name` field is updated as
    /// well so that a later serialization stays consistent with the display
    /// name. Repeating the same rename leaves the asset in the same state.
    pub fn rename(&mut self, new_name: &str) {
        self.name = new_name.to_string();
        if self.name_is_embedded {
            if let Value::Object(map) = &mut self.document {
                map.insert("name".to_string(), Value::String(new_name.to_string()));
            }
        }
        self.modified = true;
    }

    /// Serialize the document to UTF-8 JSON text.
    pub fn document_text(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.document)?)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().to_string())
}
