//! Terminal rendering of the order conversation

pub mod chat;

pub use chat::ChatFormatter;
