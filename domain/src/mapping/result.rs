//! Mapping results

use super::ranking::rank_candidates;
use crate::core::error::DomainError;
use crate::term::{LocalTerm, RemoteTerm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How confident a mapping is, derived from its best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingMethod {
    /// Best score above 0.8
    ExactMatch,
    /// Best score above 0.6
    PartialMatch,
    /// Any other score above the threshold
    FuzzyMatch,
    /// No candidate survived ranking
    NoMatch,
    /// The remote lookup failed
    Error,
}

impl MappingMethod {
    /// Classify the best score of a ranking (`None` when nothing matched).
    pub fn from_confidence(best: Option<f64>) -> Self {
        match best {
            None => MappingMethod::NoMatch,
            Some(score) if score > 0.8 => MappingMethod::ExactMatch,
            Some(score) if score > 0.6 => MappingMethod::PartialMatch,
            Some(_) => MappingMethod::FuzzyMatch,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MappingMethod::ExactMatch => "exact_match",
            MappingMethod::PartialMatch => "partial_match",
            MappingMethod::FuzzyMatch => "fuzzy_match",
            MappingMethod::NoMatch => "no_match",
            MappingMethod::Error => "error",
        }
    }
}

impl std::fmt::Display for MappingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MappingMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "_").as_str() {
            "exact_match" => Ok(MappingMethod::ExactMatch),
            "partial_match" => Ok(MappingMethod::PartialMatch),
            "fuzzy_match" => Ok(MappingMethod::FuzzyMatch),
            "no_match" => Ok(MappingMethod::NoMatch),
            "error" => Ok(MappingMethod::Error),
            other => Err(DomainError::InvalidMappingMethod(other.to_string())),
        }
    }
}

/// Outcome of mapping one local term to remote classifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    #[serde(rename = "namaste_term")]
    pub local_term: LocalTerm,
    #[serde(rename = "icd11_matches")]
    pub remote_matches: Vec<RemoteTerm>,
    pub confidence_score: f64,
    pub mapping_method: MappingMethod,
    pub created_at: DateTime<Utc>,
}

impl MappingResult {
    /// Rank `candidates` against `local_term` and classify the outcome.
    pub fn from_candidates(local_term: LocalTerm, candidates: Vec<RemoteTerm>) -> Self {
        let ranked = rank_candidates(&local_term, candidates);
        let best = ranked.first().map(|(score, _)| *score);

        Self {
            local_term,
            remote_matches: ranked.into_iter().map(|(_, term)| term).collect(),
            confidence_score: best.unwrap_or(0.0),
            mapping_method: MappingMethod::from_confidence(best),
            created_at: Utc::now(),
        }
    }

    /// Mapping whose remote lookup failed.
    pub fn failed(local_term: LocalTerm) -> Self {
        Self {
            local_term,
            remote_matches: Vec::new(),
            confidence_score: 0.0,
            mapping_method: MappingMethod::Error,
            created_at: Utc::now(),
        }
    }
}

/// Per-method counts of a bulk mapping run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkSummary {
    pub exact_matches: usize,
    pub partial_matches: usize,
    pub fuzzy_matches: usize,
    pub no_matches: usize,
    pub errors: usize,
}

impl BulkSummary {
    pub fn from_results(results: &[MappingResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            match result.mapping_method {
                MappingMethod::ExactMatch => summary.exact_matches += 1,
                MappingMethod::PartialMatch => summary.partial_matches += 1,
                MappingMethod::FuzzyMatch => summary.fuzzy_matches += 1,
                MappingMethod::NoMatch => summary.no_matches += 1,
                MappingMethod::Error => summary.errors += 1,
            }
            summary
        })
    }
}

/// Result of mapping several local terms in one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkMappingReport {
    pub total_processed: usize,
    /// Mappings in request order
    pub mappings: Vec<MappingResult>,
    /// Requested ids that are not in the local catalog
    pub missing: Vec<String>,
    pub summary: BulkSummary,
}

impl BulkMappingReport {
    pub fn new(mappings: Vec<MappingResult>, missing: Vec<String>) -> Self {
        Self {
            total_processed: mappings.len(),
            summary: BulkSummary::from_results(&mappings),
            mappings,
            missing,
        }
    }
}
