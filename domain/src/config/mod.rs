//! Configuration-facing domain types

pub mod output_format;

pub use output_format::OutputFormat;
