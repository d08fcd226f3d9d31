//! Remote term source port
//!
//! Defines the interface to the remote classification service (ICD-11).

use super::token_provider::AuthError;
use async_trait::async_trait;
use termbridge_domain::RemoteTerm;
use thiserror::Error;

/// Why a remote search produced no results
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteSearchError {
    #[error("Token acquisition failed: {0}")]
    Auth(#[from] AuthError),

    #[error("All {attempted} remote endpoints failed")]
    AllEndpointsFailed { attempted: usize },
}

/// Port for resolving queries against the remote classification service.
#[async_trait]
pub trait RemoteTermSource: Send + Sync {
    /// Search and report the failure reason explicitly.
    ///
    /// A blank query is not a failure: it yields `Ok(vec![])` without any
    /// network traffic.
    async fn try_search(&self, query: &str) -> Result<Vec<RemoteTerm>, RemoteSearchError>;

    /// Search, degrading every failure to an empty list.
    async fn search(&self, query: &str) -> Vec<RemoteTerm> {
        match self.try_search(query).await {
            Ok(terms) => terms,
            Err(e @ RemoteSearchError::Auth(_)) => {
                tracing::error!("Remote search for '{}' degraded to empty: {}", query, e);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Remote search for '{}' degraded to empty: {}", query, e);
                Vec::new()
            }
        }
    }
}
