//! Presentation layer for termbridge
//!
//! This crate contains the CLI definitions and the text/JSON output
//! formatters.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, SourceArg};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::{JsonFormatter, OutputFormatter};
