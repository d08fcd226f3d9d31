//! Core domain concepts shared across all subdomains.
//!
//! - [`query::SearchQuery`]: a validated terminology query
//! - [`query::SourceScope`]: which sources a query is resolved against
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod query;
