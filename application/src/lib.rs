//! Application layer for termbridge
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    local_catalog::{LocalCatalogPort, LocalSearchError},
    remote_source::{RemoteSearchError, RemoteTermSource},
    token_provider::{AuthError, TokenProvider},
};
pub use use_cases::bulk_map::{BulkMapError, BulkMapUseCase, MAX_BULK_TERMS};
pub use use_cases::map_term::{MAX_SYNONYM_QUERIES, MapTermError, MapTermUseCase};
pub use use_cases::search_terms::{OrchestrationError, SearchTermsInput, SearchTermsUseCase};
