//! Local catalog port
//!
//! Defines the interface to the local AYUSH term catalog.

use async_trait::async_trait;
use termbridge_domain::LocalTerm;
use thiserror::Error;

/// Errors reported by a local catalog search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalSearchError {
    /// The catalog was read but nothing matched
    #[error("No local catalog results for '{query}' (system={system:?})")]
    NotFound {
        query: String,
        system: Option<String>,
    },

    /// The catalog could not be searched
    #[error("Local catalog search failed: {0}")]
    Fatal(String),
}

impl LocalSearchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LocalSearchError::NotFound { .. })
    }
}

/// Port for the local term catalog.
#[async_trait]
pub trait LocalCatalogPort: Send + Sync {
    /// Case-insensitive substring search on term names, optionally restricted
    /// to one AYUSH system. Results keep catalog order.
    ///
    /// Zero matches is reported as [`LocalSearchError::NotFound`].
    async fn search(
        &self,
        query: &str,
        system: Option<&str>,
    ) -> Result<Vec<LocalTerm>, LocalSearchError>;

    /// Look a term up by its exact id.
    async fn find_by_id(&self, id: &str) -> Result<Option<LocalTerm>, LocalSearchError>;
}
