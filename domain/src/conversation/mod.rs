//! Conversation domain
//!
//! The [`Transcript`] is what the model sees; the [`DisplayLog`] is what the
//! customer sees.

pub mod display;
pub mod entities;
pub mod state;
pub mod transcript;

pub use display::{DisplayEntry, DisplayLog};
pub use entities::{Message, Role};
pub use state::SessionState;
pub use transcript::Transcript;
