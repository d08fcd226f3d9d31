//! Search result envelope.

mod result;

pub use result::{AggregateResult, SearchStatus};
