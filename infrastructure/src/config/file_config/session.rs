//! Session configuration from TOML (`[session]` and `[logging]` sections)

use orderbot_application::config::DEFAULT_MAX_INPUT_CHARS;
use serde::{Deserialize, Serialize};

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Longest accepted customer message, in characters
    pub max_input_chars: usize,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving every turn of the conversation
    pub conversation_file: Option<String>,
}
