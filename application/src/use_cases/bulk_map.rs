//! Bulk Map use case
//!
//! Maps up to [`MAX_BULK_TERMS`] local term ids in one request. Ids missing
//! from the catalog are reported, not treated as errors; the found terms are
//! mapped concurrently.

use super::map_term::{MapTermError, MapTermUseCase};
use crate::ports::local_catalog::LocalSearchError;
use futures::future::join_all;
use termbridge_domain::BulkMappingReport;
use thiserror::Error;
use tracing::{info, warn};

/// Maximum number of ids accepted per bulk request
pub const MAX_BULK_TERMS: usize = 10;

#[derive(Error, Debug)]
pub enum BulkMapError {
    #[error("No term ids given")]
    Empty,

    #[error("Maximum of {max} terms allowed for bulk mapping, got {requested}")]
    TooManyTerms { requested: usize, max: usize },

    #[error(transparent)]
    Catalog(#[from] LocalSearchError),
}

/// Use case for mapping several local terms at once.
#[derive(Clone)]
pub struct BulkMapUseCase {
    mapper: MapTermUseCase,
}

impl BulkMapUseCase {
    pub fn new(mapper: MapTermUseCase) -> Self {
        Self { mapper }
    }

    pub async fn execute(&self, ids: &[String]) -> Result<BulkMappingReport, BulkMapError> {
        if ids.is_empty() {
            return Err(BulkMapError::Empty);
        }
        if ids.len() > MAX_BULK_TERMS {
            return Err(BulkMapError::TooManyTerms {
                requested: ids.len(),
                max: MAX_BULK_TERMS,
            });
        }

        let mut terms = Vec::new();
        let mut missing = Vec::new();
        for id in ids {
            match self.mapper.find_term(id).await {
                Ok(term) => terms.push(term),
                Err(MapTermError::TermNotFound(id)) => {
                    warn!("Local term '{}' not found for bulk mapping", id);
                    missing.push(id);
                }
                Err(MapTermError::Catalog(e)) => return Err(e.into()),
            }
        }

        let mappings = join_all(terms.into_iter().map(|term| self.mapper.map_term(term))).await;
        let report = BulkMappingReport::new(mappings, missing);
        info!(
            "Bulk mapping processed {} terms ({} missing)",
            report.total_processed,
            report.missing.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::local_catalog::LocalCatalogPort;
    use crate::ports::remote_source::{RemoteSearchError, RemoteTermSource};
    use async_trait::async_trait;
    use std::sync::Arc;
    use termbridge_domain::{LocalTerm, RemoteTerm};

    struct MockCatalog {
        terms: Vec<LocalTerm>,
        fatal: bool,
    }

    #[async_trait]
    impl LocalCatalogPort for MockCatalog {
        async fn search(
            &self,
            _query: &str,
            _system: Option<&str>,
        ) -> Result<Vec<LocalTerm>, LocalSearchError> {
            Ok(self.terms.clone())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<LocalTerm>, LocalSearchError> {
            if self.fatal {
                return Err(LocalSearchError::Fatal("catalog unavailable".to_string()));
            }
            Ok(self.terms.iter().find(|t| t.id == id).cloned())
        }
    }

    /// Every query resolves to one remote term titled like the query
    struct EchoRemote;

    #[async_trait]
    impl RemoteTermSource for EchoRemote {
        async fn try_search(&self, query: &str) -> Result<Vec<RemoteTerm>, RemoteSearchError> {
            Ok(vec![RemoteTerm {
                code: format!("X-{}", query),
                title: query.to_string(),
                ..Default::default()
            }])
        }
    }

    fn term(id: &str, name: &str) -> LocalTerm {
        LocalTerm {
            id: id.to_string(),
            term: name.to_string(),
            ..Default::default()
        }
    }

    fn use_case(fatal: bool) -> BulkMapUseCase {
        let catalog = MockCatalog {
            terms: vec![term("NAM1", "Jwara"), term("NAM2", "Kasa")],
            fatal,
        };
        BulkMapUseCase::new(MapTermUseCase::new(Arc::new(catalog), Arc::new(EchoRemote)))
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_maps_found_terms_in_order_and_reports_missing() {
        let report = use_case(false)
            .execute(&ids(&["NAM2", "NAM404", "NAM1"]))
            .await
            .unwrap();

        assert_eq!(report.total_processed, 2);
        assert_eq!(report.mappings[0].local_term.id, "NAM2");
        assert_eq!(report.mappings[1].local_term.id, "NAM1");
        assert_eq!(report.missing, vec!["NAM404"]);
        assert_eq!(report.summary.exact_matches, 2);
    }

    #[tokio::test]
    async fn test_rejects_more_than_ten_ids() {
        let many: Vec<String> = (0..11).map(|i| format!("NAM{}", i)).collect();
        let err = use_case(false).execute(&many).await.unwrap_err();
        assert!(matches!(
            err,
            BulkMapError::TooManyTerms {
                requested: 11,
                max: 10
            }
        ));
    }

    #[tokio::test]
    async fn test_rejects_empty_request() {
        assert!(matches!(
            use_case(false).execute(&[]).await,
            Err(BulkMapError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_catalog_failure_is_propagated() {
        let err = use_case(true).execute(&ids(&["NAM1"])).await.unwrap_err();
        assert!(matches!(err, BulkMapError::Catalog(LocalSearchError::Fatal(_))));
    }
}
