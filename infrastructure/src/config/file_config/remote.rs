//! Remote service configuration from TOML (`[remote]` section)

use crate::auth::{DEFAULT_SCOPE, DEFAULT_TOKEN_URL};
use crate::icd::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw `[remote]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRemoteConfig {
    /// Release root the search paths are appended to
    pub base_url: String,
    /// OAuth2 token endpoint
    pub token_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub scope: String,
    /// Per-request timeout for the token exchange and searches
    pub timeout_seconds: u64,
}

impl Default for FileRemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            client_id: None,
            client_secret: None,
            scope: DEFAULT_SCOPE.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl FileRemoteConfig {
    pub fn has_credentials(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        set(&self.client_id) && set(&self.client_secret)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_who() {
        let config = FileRemoteConfig::default();
        assert_eq!(config.base_url, "https://id.who.int/icd/release/11/2024-01");
        assert_eq!(
            config.token_url,
            "https://icdaccessmanagement.who.int/connect/token"
        );
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_blank_secret_is_not_a_credential() {
        let config = FileRemoteConfig {
            client_id: Some("abc".to_string()),
            client_secret: Some("".to_string()),
            ..Default::default()
        };
        assert!(!config.has_credentials());
    }
}
