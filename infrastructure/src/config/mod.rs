//! Configuration file loading for termbridge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment (`ICD11_*`, `NAMASTE_DATA_FILE`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./termbridge.toml` or `./.termbridge.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/termbridge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLocalConfig, FileOutputConfig, FileRemoteConfig,
};
pub use loader::ConfigLoader;
