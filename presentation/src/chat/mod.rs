//! Interactive chat module
//!
//! Provides a readline-based interactive order conversation.

mod repl;

pub use repl::{OrderRepl, ReplCommand, ReplError, TurnOutcome};
