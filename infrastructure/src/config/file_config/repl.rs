//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while waiting for OrderBot
    pub show_progress: bool,
    /// Clear and redraw the whole conversation after every reply
    pub redraw: bool,
    /// Path to the line-editor history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            redraw: true,
            history_file: None,
        }
    }
}
