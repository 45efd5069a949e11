//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-level config file names, checked in order.
const PROJECT_FILES: [&str; 2] = ["orderbot.toml", ".orderbot.toml"];

/// Prefix of environment overrides, e.g. `ORDERBOT_PROVIDER__MODEL`.
const ENV_PREFIX: &str = "ORDERBOT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ORDERBOT_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./orderbot.toml` or `./.orderbot.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/orderbot/config.toml`
    /// 5. Default values
    ///
    /// The merged result is validated; any issue fails the load.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!(path = %global_path.display(), "Merging global config");
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            debug!(path = %project_path.display(), "Merging project config");
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::Load(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "Merging explicit config");
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: FileConfig = figment.extract()?;
        Self::validated(config)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Validate a configuration, e.g. again after command-line overrides.
    pub fn validated(config: FileConfig) -> Result<FileConfig, ConfigError> {
        let issues = config.validate();
        if issues.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Invalid(issues))
        }
    }

    /// Get the global config file path
    ///
    /// `$XDG_CONFIG_HOME/orderbot/config.toml` (or the platform equivalent).
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("orderbot").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations (for `--show-config`)
    pub fn describe_sources(config_path: Option<&Path>) -> String {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] {}*  (e.g. {}PROVIDER__MODEL)", ENV_PREFIX, ENV_PREFIX));

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            lines.push(format!("  [{}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./orderbot.toml or ./.orderbot.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines.join("\n")
    }
}
