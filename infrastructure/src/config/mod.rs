//! Configuration loading for orderbot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ORDERBOT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./orderbot.toml` or `./.orderbot.toml`
//! 4. Global: `$XDG_CONFIG_HOME/orderbot/config.toml`
//! 5. Default values
//!
//! The provider credential is resolved separately (see [`credentials`]).

pub mod credentials;
mod error;
mod file_config;
mod loader;

pub use credentials::{ApiKey, resolve_api_key};
pub use error::ConfigError;
pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileProviderConfig,
    FileReplConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
