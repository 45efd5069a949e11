//! LLM Gateway port
//!
//! Defines the interface for requesting a completion from a hosted model.

use async_trait::async_trait;
use orderbot_domain::{Message, Model};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Credential missing or rejected by the provider (401/403).
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Provider backpressure (429). `retry_after` is informational only;
    /// nothing here retries.
    #[error("Rate limited by provider: {message}")]
    RateLimited {
        message: String,
        retry_after: Option<Duration>,
    },

    /// The provider answered, but not with a usable completion.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Connection failure before any response arrived.
    #[error("Connection error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,
}

impl GatewayError {
    /// No later request can succeed without operator action.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GatewayError::Authentication(_))
    }
}

/// Gateway for LLM communication
///
/// Stateless between calls: everything the model needs is the ordered
/// message list passed in. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the full conversation and return the text of the first choice.
    async fn complete(&self, model: &Model, messages: &[Message]) -> Result<String, GatewayError>;
}
