//! Presentation layer for orderbot
//!
//! This crate contains the CLI definition, the chat bubble formatter,
//! the completion spinner, and the interactive order REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{OrderRepl, ReplError};
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::ChatFormatter;
pub use progress::SpinnerProgress;
