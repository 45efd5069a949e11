//! Provider configuration from TOML (`[provider]` section)

use orderbot_domain::Model;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat-completions provider.
///
/// # Example
///
/// ```toml
/// [provider]
/// base_url = "https://api.groq.com/openai/v1"
/// model = "llama3-70b-8192"
/// api_key_env = "GROQ_API_KEY"
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// API root; `/chat/completions` is appended.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Environment variable holding the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`).
    pub api_key: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// Sampling temperature; provider default when unset.
    pub temperature: Option<f32>,
    /// Response length cap; provider default when unset.
    pub max_tokens: Option<u32>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: Model::default().to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            timeout_secs: 120,
            temperature: None,
            max_tokens: None,
        }
    }
}

impl FileProviderConfig {
    pub fn parse_model(&self) -> Model {
        Model::from(self.model.trim())
    }

    /// Copy with the API key replaced by a placeholder, for display.
    pub fn redacted(&self) -> Self {
        Self {
            api_key: self.api_key.as_ref().map(|_| "<redacted>".to_string()),
            ..self.clone()
        }
    }
}
