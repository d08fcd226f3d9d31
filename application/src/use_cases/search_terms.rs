//! Search Terms use case
//!
//! Resolves one query against the local catalog and/or the remote
//! classification service and merges both result streams into an
//! [`AggregateResult`].
//!
//! Each source runs as its own task. A failing (or panicking) source degrades
//! to an empty list and never prevents the other source's results from being
//! returned. Only a failure of the orchestration itself yields
//! [`SearchStatus::Error`](termbridge_domain::SearchStatus::Error).

use crate::ports::local_catalog::{LocalCatalogPort, LocalSearchError};
use crate::ports::remote_source::RemoteTermSource;
use std::sync::Arc;
use std::time::Instant;
use termbridge_domain::{AggregateResult, CanonicalTerm, DomainError, SearchQuery, SourceScope};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Failures outside the per-source guards
#[derive(Error, Debug)]
pub enum OrchestrationError {
    #[error("{0}")]
    InvalidQuery(#[from] DomainError),
}

/// Input for the [`SearchTermsUseCase`].
#[derive(Debug, Clone)]
pub struct SearchTermsInput {
    pub text: String,
    pub scope: SourceScope,
    /// AYUSH system filter applied to the local catalog
    pub category: Option<String>,
}

impl SearchTermsInput {
    pub fn new(text: impl Into<String>, scope: SourceScope) -> Self {
        Self {
            text: text.into(),
            scope,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Use case aggregating local and remote terminology search.
#[derive(Clone)]
pub struct SearchTermsUseCase {
    local: Arc<dyn LocalCatalogPort>,
    remote: Arc<dyn RemoteTermSource>,
}

impl SearchTermsUseCase {
    pub fn new(local: Arc<dyn LocalCatalogPort>, remote: Arc<dyn RemoteTermSource>) -> Self {
        Self { local, remote }
    }

    /// Resolve the query. Always returns an envelope, never an error.
    pub async fn execute(&self, input: SearchTermsInput) -> AggregateResult {
        let start = Instant::now();

        match self.try_execute(&input, start).await {
            Ok(result) => {
                info!(
                    "Search completed for '{}': {} total results in {}ms",
                    result.query, result.total_count, result.elapsed_millis
                );
                result
            }
            Err(e) => {
                error!("Search orchestration failed for '{}': {}", input.text, e);
                AggregateResult::failed(input.text, input.scope, elapsed_millis(start), e)
            }
        }
    }

    async fn try_execute(
        &self,
        input: &SearchTermsInput,
        start: Instant,
    ) -> Result<AggregateResult, OrchestrationError> {
        let query = SearchQuery::try_new(input.text.clone(), input.scope, input.category.clone())?;
        debug!("Resolving {}", query);

        // Spawn both branches before awaiting either so they run concurrently.
        let local_task = query.scope().includes_local().then(|| {
            let local = Arc::clone(&self.local);
            let text = query.trimmed().to_string();
            let system = query.category().map(str::to_string);
            tokio::spawn(async move { search_local(local.as_ref(), &text, system.as_deref()).await })
        });

        let remote_task = query.scope().includes_remote().then(|| {
            let remote = Arc::clone(&self.remote);
            let text = query.trimmed().to_string();
            tokio::spawn(async move { search_remote(remote.as_ref(), &text).await })
        });

        let local_results = join_branch("local", local_task).await;
        let remote_results = join_branch("remote", remote_task).await;

        Ok(AggregateResult::merged(
            query.text(),
            query.scope(),
            local_results,
            remote_results,
            elapsed_millis(start),
        ))
    }
}

async fn search_local(
    local: &dyn LocalCatalogPort,
    text: &str,
    system: Option<&str>,
) -> Vec<CanonicalTerm> {
    match local.search(text, system).await {
        Ok(terms) => {
            info!("Local catalog search completed: {} results", terms.len());
            terms.into_iter().map(CanonicalTerm::from).collect()
        }
        Err(e @ LocalSearchError::NotFound { .. }) => {
            warn!("{}", e);
            Vec::new()
        }
        Err(e) => {
            error!("{}", e);
            Vec::new()
        }
    }
}

async fn search_remote(remote: &dyn RemoteTermSource, text: &str) -> Vec<CanonicalTerm> {
    let terms = remote.search(text).await;
    info!("Remote search completed: {} results", terms.len());
    terms.into_iter().map(CanonicalTerm::from).collect()
}

/// Await one source branch; a branch that panicked contributes nothing.
async fn join_branch(
    source: &str,
    task: Option<JoinHandle<Vec<CanonicalTerm>>>,
) -> Vec<CanonicalTerm> {
    let Some(handle) = task else {
        return Vec::new();
    };
    match handle.await {
        Ok(results) => results,
        Err(e) => {
            error!("{} search task aborted: {}", source, e);
            Vec::new()
        }
    }
}

fn elapsed_millis(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
