//! Local catalog configuration from TOML (`[local]` section)

use crate::catalog::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw `[local]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLocalConfig {
    /// Path of the JSON catalog
    pub data_file: PathBuf,
}

impl Default for FileLocalConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}
