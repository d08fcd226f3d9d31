//! Local NAMASTE catalog adapter

mod json;

pub use json::{DEFAULT_DATA_FILE, JsonCatalogResolver};
