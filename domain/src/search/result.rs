//! Aggregated search result

use crate::core::query::SourceScope;
use crate::term::CanonicalTerm;
use serde::{Deserialize, Serialize};

/// Overall outcome of an aggregated search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Success,
    NoResults,
    Error,
}

/// The uniform response envelope of a search.
///
/// Serializes to
/// `{query, source, namaste_results, icd11_results, total_results, search_time_ms, status, message?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub query: String,
    #[serde(rename = "source")]
    pub scope: SourceScope,
    #[serde(rename = "namaste_results")]
    pub local_results: Vec<CanonicalTerm>,
    #[serde(rename = "icd11_results")]
    pub remote_results: Vec<CanonicalTerm>,
    #[serde(rename = "total_results")]
    pub total_count: usize,
    #[serde(rename = "search_time_ms")]
    pub elapsed_millis: u64,
    pub status: SearchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AggregateResult {
    /// Merge the per-source lists and classify the outcome.
    ///
    /// `total_count` is computed here and nowhere else.
    pub fn merged(
        query: impl Into<String>,
        scope: SourceScope,
        local_results: Vec<CanonicalTerm>,
        remote_results: Vec<CanonicalTerm>,
        elapsed_millis: u64,
    ) -> Self {
        let query = query.into();
        let total_count = local_results.len() + remote_results.len();
        let (status, message) = if total_count == 0 {
            (
                SearchStatus::NoResults,
                Some(format!("No results found for '{}' in the selected sources", query)),
            )
        } else {
            (SearchStatus::Success, None)
        };

        Self {
            query,
            scope,
            local_results,
            remote_results,
            total_count,
            elapsed_millis,
            status,
            message,
        }
    }

    /// Envelope for an orchestration-level failure.
    pub fn failed(
        query: impl Into<String>,
        scope: SourceScope,
        elapsed_millis: u64,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self {
            query: query.into(),
            scope,
            local_results: Vec::new(),
            remote_results: Vec::new(),
            total_count: 0,
            elapsed_millis,
            status: SearchStatus::Error,
            message: Some(format!("Search failed: {}", reason)),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == SearchStatus::Error
    }
}
