//! Configuration errors. All of them stop the process before a session opens.

use super::file_config::ConfigValidationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error(
        "{env_var} is missing. Add it to a `.env` file or your environment variables \
         (or set provider.api_key) and restart."
    )]
    MissingCredential { env_var: String },

    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration:\n{}", format_issues(.0))]
    Invalid(Vec<ConfigValidationError>),
}

fn format_issues(issues: &[ConfigValidationError]) -> String {
    issues
        .iter()
        .map(|i| format!("  - {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(e.to_string())
    }
}
