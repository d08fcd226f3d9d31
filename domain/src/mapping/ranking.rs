//! Candidate ranking for a local term

use super::similarity::similarity_score;
use crate::term::{LocalTerm, RemoteTerm};
use std::collections::HashSet;

/// Candidates at or below this score are discarded.
pub const SCORE_THRESHOLD: f64 = 0.3;

/// At most this many remote matches are kept per mapping.
pub const MAX_MATCHES: usize = 5;

/// Synonym-to-synonym similarity is weighted down by this factor.
pub const SYNONYM_WEIGHT: f64 = 0.9;

/// Score remote candidates against a local term.
///
/// Candidates are deduplicated by code (first occurrence wins, code-less
/// candidates are skipped), scored, filtered by [`SCORE_THRESHOLD`] and
/// returned best first, capped at [`MAX_MATCHES`]. Equal scores keep their
/// search order.
pub fn rank_candidates(local: &LocalTerm, candidates: Vec<RemoteTerm>) -> Vec<(f64, RemoteTerm)> {
    let mut seen_codes = HashSet::new();
    let mut scored: Vec<(f64, RemoteTerm)> = Vec::new();

    for candidate in candidates {
        if !candidate.has_code() || !seen_codes.insert(candidate.code.clone()) {
            continue;
        }
        let score = score_candidate(local, &candidate);
        if score > SCORE_THRESHOLD {
            scored.push((score, candidate));
        }
    }

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(MAX_MATCHES);
    scored
}

fn score_candidate(local: &LocalTerm, candidate: &RemoteTerm) -> f64 {
    let mut score = similarity_score(&local.term, &candidate.title);
    for synonym in &local.synonyms {
        for remote_synonym in &candidate.synonyms {
            if synonym.is_empty() || remote_synonym.is_empty() {
                continue;
            }
            score = score.max(similarity_score(synonym, remote_synonym) * SYNONYM_WEIGHT);
        }
    }
    score
}
