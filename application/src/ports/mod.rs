//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod local_catalog;
pub mod remote_source;
pub mod token_provider;
