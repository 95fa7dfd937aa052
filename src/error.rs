//! Error types for bank packaging.

use std::path::PathBuf;
use thiserror::Error;

use crate::asset::AssetKind;

/// Result type for bankroll operations.
pub type Result<T> = std::result::Result<T, BankrollError>;

/// Errors that can occur while grouping and packaging banks.
#[derive(Error, Debug)]
pub enum BankrollError {
    // Asset Errors
    #[error("Cannot resolve a name for {kind} asset: no embedded name, no source path, no explicit name")]
    NameResolution { kind: AssetKind },

    #[error("{kind} '{name}' appears to contain multiple instances of the delimiter")]
    AmbiguousDelimiter { kind: AssetKind, name: String },

    #[error("Not a valid asset: {detail}")]
    InvalidAsset { detail: String },

    // Configuration Errors
    #[error("Bank delimiter must not be empty")]
    EmptyDelimiter,

    #[error("Failed to read config file: {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // File Errors
    #[error("Failed to read file: {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory creation failed: {path}: {source}")]
    DirectoryCreateError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Serialization Errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // Generic Errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
