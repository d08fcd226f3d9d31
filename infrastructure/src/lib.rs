//! Infrastructure layer for termbridge
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the OAuth2 token cache and ICD-11 search client, the
//! JSON catalog reader, and configuration file loading.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod icd;

// Re-export commonly used types
pub use auth::{OAuthClientCredentials, TokenCache, TokenExchange};
pub use catalog::JsonCatalogResolver;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLocalConfig, FileOutputConfig,
    FileRemoteConfig,
};
pub use icd::IcdRemoteResolver;
