//! Domain layer for orderbot
//!
//! This crate contains the conversation entities and the fixed OrderBot
//! persona. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Transcript**: the append-only list of role-tagged turns that is sent,
//!   in full, to the model on every completion. Seeded with the system
//!   instruction and a scripted greeting exchange.
//! - **DisplayLog**: the (customer, OrderBot) pairs of completed cycles, used
//!   only for rendering.
//! - **SessionState**: `Idle` or `AwaitingCompletion`.

pub mod conversation;
pub mod core;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use conversation::{DisplayEntry, DisplayLog, Message, Role, SessionState, Transcript};
pub use crate::core::{error::DomainError, model::Model};
pub use prompt::{Menu, OrderBotPrompt, PIZZA_MENU, Price};
