//! Domain layer for termbridge
//!
//! This crate contains the terminology records, search value objects, the
//! response normalization rules and the FHIR model. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Sources
//!
//! Two terminology sources are resolved side by side:
//!
//! - **Local catalog** (NAMASTE): AYUSH terms stored in a structured file
//! - **Remote service** (ICD-11): the WHO classification API
//!
//! Each source owns its record variant ([`LocalTerm`], [`RemoteTerm`]); both
//! are converted into [`CanonicalTerm`] for transport.
//!
//! ## Normalization
//!
//! The remote service answers with several response shapes. The
//! [`normalize`] module holds ordered [`FieldRule`] tables that turn any of
//! them into [`RemoteTerm`]s.

pub mod config;
pub mod core;
pub mod fhir;
pub mod mapping;
pub mod normalize;
pub mod search;
pub mod systems;
pub mod term;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    query::{SearchQuery, SourceScope},
};
pub use fhir::{CodeableConcept, Coding, Condition};
pub use mapping::{
    BulkMappingReport, BulkSummary, MappingMethod, MappingResult, similarity_score,
};
pub use normalize::{FieldRule, parse_remote_entities};
pub use search::{AggregateResult, SearchStatus};
pub use systems::{TerminologySystem, supported_systems};
pub use term::{CanonicalTerm, LocalTerm, RemoteTerm};
