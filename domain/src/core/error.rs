//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query text cannot be empty")]
    EmptyQuery,

    #[error("Unknown source scope: {0} (expected namaste, icd11 or both)")]
    InvalidScope(String),

    #[error("Unknown mapping method: {0}")]
    InvalidMappingMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_display() {
        assert_eq!(DomainError::EmptyQuery.to_string(), "Query text cannot be empty");
    }

    #[test]
    fn test_invalid_scope_display_names_expected_values() {
        let err = DomainError::InvalidScope("snomed".to_string());
        assert!(err.to_string().contains("snomed"));
        assert!(err.to_string().contains("namaste, icd11 or both"));
    }
}
