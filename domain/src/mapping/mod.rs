//! Local-to-remote term mapping.
//!
//! - [`similarity::similarity_score`]: word-overlap score between two labels
//! - [`ranking::rank_candidates`]: dedupe, score and select remote matches
//! - [`result::MappingResult`]: the outcome of mapping one local term

pub mod ranking;
pub mod result;
pub mod similarity;

pub use ranking::{MAX_MATCHES, SCORE_THRESHOLD, SYNONYM_WEIGHT, rank_candidates};
pub use result::{BulkMappingReport, BulkSummary, MappingMethod, MappingResult};
pub use similarity::similarity_score;
