//! Label similarity

use std::collections::HashSet;

/// Similarity of two labels in `[0.0, 1.0]`.
///
/// Labels are trimmed and lower-cased. Equal labels score 1.0, containment of
/// one in the other 0.8, otherwise the Jaccard index of their word sets.
pub fn similarity_score(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return 0.8;
    }

    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();
    let union = words_a.union(&words_b).count();
    if union == 0 {
        return 0.0;
    }
    words_a.intersection(&words_b).count() as f64 / union as f64
}
