//! Map Term use case
//!
//! Maps a local catalog term to remote classifications. The remote service is
//! searched for the term itself and for its first few synonyms; the combined
//! candidates are ranked by [`MappingResult::from_candidates`].

use crate::ports::local_catalog::{LocalCatalogPort, LocalSearchError};
use crate::ports::remote_source::RemoteTermSource;
use chrono::Utc;
use std::sync::Arc;
use termbridge_domain::{Condition, LocalTerm, MappingResult};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Leading synonyms considered for search in addition to the term itself
pub const MAX_SYNONYM_QUERIES: usize = 3;

/// Errors that can occur when mapping by id
#[derive(Error, Debug)]
pub enum MapTermError {
    #[error("Local term with id '{0}' not found")]
    TermNotFound(String),

    #[error(transparent)]
    Catalog(#[from] LocalSearchError),
}

/// Use case for mapping local terms to remote classifications.
#[derive(Clone)]
pub struct MapTermUseCase {
    local: Arc<dyn LocalCatalogPort>,
    remote: Arc<dyn RemoteTermSource>,
}

impl MapTermUseCase {
    pub fn new(local: Arc<dyn LocalCatalogPort>, remote: Arc<dyn RemoteTermSource>) -> Self {
        Self { local, remote }
    }

    /// Map a term. Never fails: a failed primary lookup yields
    /// [`MappingMethod::Error`](termbridge_domain::MappingMethod::Error).
    pub async fn map_term(&self, term: LocalTerm) -> MappingResult {
        info!("Mapping local term '{}' ({}) to remote classifications", term.term, term.id);

        let mut candidates = match self.remote.try_search(&term.term).await {
            Ok(found) => found,
            Err(e) => {
                warn!("Mapping of {} failed: {}", term.id, e);
                return MappingResult::failed(term);
            }
        };

        let synonyms: Vec<&String> = term
            .synonyms
            .iter()
            .take(MAX_SYNONYM_QUERIES)
            .filter(|s| !s.trim().is_empty())
            .collect();
        for synonym in synonyms {
            match self.remote.try_search(synonym).await {
                Ok(found) => candidates.extend(found),
                Err(e) => debug!("Synonym lookup '{}' skipped: {}", synonym, e),
            }
        }

        let result = MappingResult::from_candidates(term, candidates);
        info!(
            "Mapped {} to {} remote terms. Method: {}, Confidence: {:.2}",
            result.local_term.id,
            result.remote_matches.len(),
            result.mapping_method,
            result.confidence_score
        );
        result
    }

    /// Look up a local term by id and map it.
    pub async fn map_by_id(&self, id: &str) -> Result<MappingResult, MapTermError> {
        let term = self.find_term(id).await?;
        Ok(self.map_term(term).await)
    }

    /// Map a local term and render it as a FHIR `Condition`.
    pub async fn condition_for(
        &self,
        id: &str,
        patient_id: Option<&str>,
    ) -> Result<Condition, MapTermError> {
        let mapping = self.map_by_id(id).await?;
        Ok(Condition::from_mapping(&mapping, patient_id, Utc::now()))
    }

    pub(crate) async fn find_term(&self, id: &str) -> Result<LocalTerm, MapTermError> {
        self.local
            .find_by_id(id)
            .await?
            .ok_or_else(|| MapTermError::TermNotFound(id.to_string()))
    }
}
