//! Use cases (application services)
//!
//! - [`search_terms`]: aggregated search across both sources
//! - [`map_term`]: map one local term to remote classifications
//! - [`bulk_map`]: map several local terms at once

pub mod bulk_map;
pub mod map_term;
pub mod search_terms;
