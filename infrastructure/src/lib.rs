//! Infrastructure layer for orderbot
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ApiKey, ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig,
    FileProviderConfig, FileReplConfig, resolve_api_key,
};
pub use logging::JsonlConversationLogger;
pub use providers::OpenAiCompatibleGateway;
