//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_FILES: &[&str] = &["termbridge.toml", ".termbridge.toml"];

/// Environment variables that override file settings
const ENV_KEYS: &[&str] = &[
    "ICD11_BASE_URL",
    "ICD11_TOKEN_URL",
    "ICD11_CLIENT_ID",
    "ICD11_CLIENT_SECRET",
    "NAMASTE_DATA_FILE",
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./termbridge.toml` or `./.termbridge.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/termbridge/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env_provider()).extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    ///
    /// Environment variables still apply so credentials need not live in a file.
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env_provider())
            .extract()
            .map_err(Box::new)
    }

    fn env_provider() -> Env {
        Env::raw()
            .only(ENV_KEYS)
            .map(|key| env_key_path(key.as_str()).into())
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("termbridge").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        for key in ENV_KEYS {
            if std::env::var_os(key).is_some() {
                println!("  [FOUND] Env:     {}", key);
            }
        }

        if let Some(path) = config_path {
            println!("  [FOUND] Explicit: {}", path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./termbridge.toml or ./.termbridge.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

/// Dotted config path for an environment variable:
/// `ICD11_CLIENT_ID` → `remote.client_id`, `NAMASTE_DATA_FILE` → `local.data_file`.
fn env_key_path(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    match key.strip_prefix("icd11_") {
        Some(field) => format!("remote.{}", field),
        None => format!("local.{}", key.trim_start_matches("namaste_")),
    }
}
