//! Configuration.
//!
//! Everything the pipeline needs from the outside world lives in one
//! explicit [`Config`] value loaded from a JSON file and passed into the
//! core's entry points. The core never reads global state.
//!
//! ```json
//! {
//!     "base_preset_dir": "/home/me/Documents/Vital",
//!     "bank_dir": "Banks",
//!     "delimiter": "::"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BankrollError, Result};

/// Subdirectory of the preset tree holding user-saved assets.
pub const USER_DIR: &str = "User";

/// Pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root of the synth's preset tree.
    pub base_preset_dir: PathBuf,

    /// Output directory for bank archives, relative to `base_preset_dir`.
    pub bank_dir: String,

    /// Separator marking a bank-scoped asset name.
    pub delimiter: String,
}

impl Config {
    /// Load and validate configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| BankrollError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config =
            serde_json::from_str(&content).map_err(|e| BankrollError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(BankrollError::EmptyDelimiter);
        }
        Ok(())
    }

    /// Directory scanned for user assets: `{base_preset_dir}/User`.
    pub fn user_dir(&self) -> PathBuf {
        self.base_preset_dir.join(USER_DIR)
    }

    /// Directory bank archives are written to.
    pub fn bank_output_dir(&self) -> PathBuf {
        self.base_preset_dir.join(&self.bank_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"base_preset_dir": "/tmp/vital", "bank_dir": "Banks", "delimiter": "::"}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.delimiter, "::");
        assert_eq!(config.user_dir(), PathBuf::from("/tmp/vital/User"));
        assert_eq!(config.bank_output_dir(), PathBuf::from("/tmp/vital/Banks"));
    }

    #[test]
    fn test_empty_delimiter_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"base_preset_dir": "/tmp/vital", "bank_dir": "Banks", "delimiter": ""}"#,
        )
        .unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(BankrollError::EmptyDelimiter)
        ));
    }

    #[test]
    fn test_missing_file_is_a_config_read_error() {
        assert!(matches!(
            Config::load(Path::new("/nonexistent/config.json")),
            Err(BankrollError::ConfigRead { .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_a_config_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(BankrollError::ConfigParse { .. })
        ));
    }
}
