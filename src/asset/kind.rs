//! Asset kind registry.
//!
//! Every kind of preset asset Vital stores on disk has two fixed constants:
//! the file extension its documents use, and the subdirectory it lives under
//! both in the user library and inside a bank archive. The registry table
//! below is the single source of truth for those constants; adding a kind
//! means adding one enum variant and one table row.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of asset kinds a bank can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Lfo,
    Preset,
    Wavetable,
    Skin,
}

/// Per-kind constants: file extension and library/archive subdirectory.
#[derive(Debug, Clone, Copy)]
pub struct KindInfo {
    pub kind: AssetKind,
    /// File extension, without the leading dot.
    pub extension: &'static str,
    /// Subdirectory name, identical in the user library and the archive.
    pub directory: &'static str,
}

/// The kind registry. Iterated wherever all kinds must be considered.
pub const KIND_REGISTRY: &[KindInfo] = &[
    KindInfo {
        kind: AssetKind::Lfo,
        extension: "vitallfo",
        directory: "LFOs",
    },
    KindInfo {
        kind: AssetKind::Preset,
        extension: "vital",
        directory: "Presets",
    },
    KindInfo {
        kind: AssetKind::Wavetable,
        extension: "vitaltable",
        directory: "Wavetables",
    },
    KindInfo {
        kind: AssetKind::Skin,
        extension: "vitalskin",
        directory: "Skins",
    },
];

impl AssetKind {
    /// All kinds, in registry order.
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Lfo,
        AssetKind::Preset,
        AssetKind::Wavetable,
        AssetKind::Skin,
    ];

    /// Look this kind up in the registry.
    ///
    /// Returns `None` only if a variant is missing its registry row, which
    /// the registry tests guard against.
    pub fn info(&self) -> Option<&'static KindInfo> {
        KIND_REGISTRY.iter().find(|info| info.kind == *self)
    }

    /// File extension for this kind, without the leading dot.
    pub fn extension(&self) -> &'static str {
        self.info().map(|info| info.extension).unwrap_or_default()
    }

    /// Subdirectory name for this kind.
    pub fn directory(&self) -> &'static str {
        self.info().map(|info| info.directory).unwrap_or_default()
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Lfo => write!(f, "Lfo"),
            AssetKind::Preset => write!(f, "Preset"),
            AssetKind::Wavetable => write!(f, "Wavetable"),
            AssetKind::Skin => write!(f, "Skin"),
        }
    }
}
