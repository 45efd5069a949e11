//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show a spinner while waiting for the reply
    pub show_progress: bool,
    /// Clear the screen and re-render the whole conversation after each reply
    pub redraw: bool,
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            redraw: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Resolved line-editor history location.
    ///
    /// `history_file` when set, otherwise `<data dir>/orderbot/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("orderbot").join("history.txt")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let repl = ReplConfig::default();
        assert!(repl.show_progress);
        assert!(repl.redraw);
        assert!(OutputConfig::default().color);
    }

    #[test]
    fn test_history_override_wins() {
        let repl = ReplConfig {
            history_file: Some(PathBuf::from("/tmp/orders-history.txt")),
            ..Default::default()
        };
        assert_eq!(
            repl.history_path(),
            Some(PathBuf::from("/tmp/orders-history.txt"))
        );
    }
}
