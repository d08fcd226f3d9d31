//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use termbridge_domain::SourceScope;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for termbridge_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => termbridge_domain::OutputFormat::Text,
            OutputFormat::Json => termbridge_domain::OutputFormat::Json,
        }
    }
}

/// Terminology sources to search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceArg {
    /// Local NAMASTE catalog only
    Namaste,
    /// Remote ICD-11 service only
    Icd11,
    /// Both sources
    #[default]
    Both,
}

impl From<SourceArg> for SourceScope {
    fn from(source: SourceArg) -> Self {
        match source {
            SourceArg::Namaste => SourceScope::Local,
            SourceArg::Icd11 => SourceScope::Remote,
            SourceArg::Both => SourceScope::Both,
        }
    }
}

/// CLI arguments for termbridge
#[derive(Parser, Debug)]
#[command(name = "termbridge")]
#[command(
    author,
    version,
    about = "Search and map AYUSH (NAMASTE) terms against ICD-11"
)]
#[command(long_about = r#"
termbridge searches the local NAMASTE catalog and the WHO ICD-11 API side by
side, maps traditional medicine terms to ICD-11 codes, and renders mappings as
FHIR Condition resources.

Configuration files are loaded from (in priority order):
1. Environment         ICD11_CLIENT_ID, ICD11_CLIENT_SECRET, ICD11_BASE_URL,
                       ICD11_TOKEN_URL, NAMASTE_DATA_FILE
2. --config <path>     Explicit config file
3. ./termbridge.toml   Project-level config
4. ~/.config/termbridge/config.toml   Global config

Example:
  termbridge search fever
  termbridge search jwara --source namaste --system ayurveda
  termbridge map NAM101 --fhir
  termbridge bulk-map NAM101 NAM202 NAM303 --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search the selected terminology sources
    Search {
        /// Search text
        query: String,

        /// Sources to search
        #[arg(short, long, value_enum, default_value = "both")]
        source: SourceArg,

        /// Restrict local results to one AYUSH system (e.g. Ayurveda)
        #[arg(long, value_name = "SYSTEM")]
        system: Option<String>,
    },

    /// Map a local term to ICD-11
    Map {
        /// Local term id (e.g. NAM101)
        id: String,

        /// Also print the FHIR CodeableConcept
        #[arg(long)]
        fhir: bool,
    },

    /// Map a local term and render it as a FHIR Condition
    Condition {
        /// Local term id
        id: String,

        /// Patient the condition refers to
        #[arg(long, value_name = "ID")]
        patient: Option<String>,
    },

    /// Map up to 10 local terms at once
    BulkMap {
        /// Local term ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// List the supported terminology systems
    Systems,
}
