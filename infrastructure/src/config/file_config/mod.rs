//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod local;
mod output;
mod remote;

pub use local::FileLocalConfig;
pub use output::FileOutputConfig;
pub use remote::FileRemoteConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A problem detected in the merged configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error(
        "remote.client_id and remote.client_secret are not set (ICD11_CLIENT_ID / ICD11_CLIENT_SECRET); remote searches will return no results"
    )]
    MissingCredentials,

    #[error("remote.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("remote.{field} cannot be empty")]
    EmptyUrl { field: &'static str },

    #[error("local.data_file cannot be empty")]
    EmptyDataFile,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote classification service (ICD-11)
    pub remote: FileRemoteConfig,
    /// Local catalog (NAMASTE)
    pub local: FileLocalConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// None of these prevent startup: missing credentials only disable the
    /// remote source.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if !self.remote.has_credentials() {
            issues.push(ConfigValidationError::MissingCredentials);
        }
        if self.remote.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.remote.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyUrl { field: "base_url" });
        }
        if self.remote.token_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyUrl { field: "token_url" });
        }
        if self.local.data_file.as_os_str().is_empty() {
            issues.push(ConfigValidationError::EmptyDataFile);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termbridge_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[remote]
base_url = "https://icd.example.org/release/11/2025-01"
client_id = "abc"
client_secret = "xyz"
timeout_seconds = 10

[local]
data_file = "/srv/namaste.json"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.remote.base_url,
            "https://icd.example.org/release/11/2025-01"
        );
        assert_eq!(config.remote.client_id.as_deref(), Some("abc"));
        assert_eq!(config.remote.timeout_seconds, 10);
        assert_eq!(config.local.data_file.to_str(), Some("/srv/namaste.json"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[remote]
client_id = "abc"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.remote.scope, "icdapi_access");
        assert_eq!(config.remote.timeout_seconds, 30);
        assert!(config.output.color);
        assert_eq!(
            config.validate(),
            vec![ConfigValidationError::MissingCredentials]
        );
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.remote.timeout_seconds = 0;
        config.remote.base_url = " ".to_string();
        config.local.data_file = Default::default();

        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert!(issues.contains(&ConfigValidationError::InvalidTimeout));
        assert!(issues.contains(&ConfigValidationError::EmptyUrl { field: "base_url" }));
        assert!(issues.contains(&ConfigValidationError::EmptyDataFile));
    }
}
