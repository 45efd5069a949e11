//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! they are consumed.

mod output;
mod providers;
mod repl;
mod session;

pub use output::FileOutputConfig;
pub use providers::FileProviderConfig;
pub use repl::FileReplConfig;
pub use session::{FileLoggingConfig, FileSessionConfig};

use orderbot_application::OrderParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A configuration value that cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.model: model name cannot be empty")]
    EmptyModel,

    #[error("provider.base_url: expected an http(s) URL, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("provider.api_key_env: environment variable name cannot be empty")]
    EmptyApiKeyEnv,

    #[error("provider.timeout_secs: must be greater than zero")]
    ZeroTimeout,

    #[error("session.max_input_chars: must be greater than zero")]
    ZeroMaxInput,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion provider settings
    pub provider: FileProviderConfig,
    /// Per-session limits
    pub session: FileSessionConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.provider.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModel);
        }
        let url = self.provider.base_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(url.to_string()));
        }
        if self.provider.api_key.is_none() && self.provider.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }
        if self.provider.timeout_secs == 0 {
            issues.push(ConfigValidationError::ZeroTimeout);
        }
        if self.session.max_input_chars == 0 {
            issues.push(ConfigValidationError::ZeroMaxInput);
        }

        issues
    }

    /// Parameters for [`TakeOrderUseCase`](orderbot_application::TakeOrderUseCase).
    pub fn order_params(&self) -> OrderParams {
        OrderParams::default()
            .with_model(self.provider.parse_model())
            .with_max_input_chars(self.session.max_input_chars)
    }

    /// Copy safe to print.
    pub fn redacted(&self) -> Self {
        Self {
            provider: self.provider.redacted(),
            ..self.clone()
        }
    }
}
