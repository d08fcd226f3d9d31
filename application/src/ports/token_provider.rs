//! Token provider port
//!
//! Supplies the bearer credential for the remote classification service.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while acquiring a bearer token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Remote credentials not configured: {0}")]
    Configuration(String),

    #[error("Authentication service error: {0}")]
    AuthService(String),

    #[error("Network error contacting authentication service: {0}")]
    Network(String),
}

/// Source of bearer tokens for the remote service.
///
/// Implementations memoize the token; concurrent first calls may each
/// perform an exchange.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return the cached token, acquiring one first if necessary.
    async fn token(&self) -> Result<String, AuthError>;

    /// Drop the cached token so the next call acquires a fresh one.
    fn invalidate(&self);
}
