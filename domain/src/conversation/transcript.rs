//! The append-only transcript sent to the model on every completion

use super::entities::{Message, Role};
use crate::core::error::DomainError;
use crate::prompt::order_bot;

/// Ordered, role-tagged conversation history (Entity)
///
/// Insertion order is conversation order and is the order sent to the
/// provider. The single system message is always at index 0; it is set by
/// [`Transcript::initialize`] and nothing after that can add, edit, remove or
/// reorder a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Number of messages placed by [`Transcript::initialize`].
    pub const SEED_LEN: usize = 3;

    /// Seed a transcript with the OrderBot system instruction and the
    /// scripted greeting exchange. Identical for every session.
    pub fn initialize() -> Self {
        Self {
            messages: Vec::from(order_bot::seed_messages()),
        }
    }

    /// Append one user or assistant turn.
    ///
    /// `Role::System` is rejected: the system instruction is fixed at seeding.
    pub fn append(
        &mut self,
        role: Role,
        content: impl Into<String>,
    ) -> Result<&Message, DomainError> {
        if !role.is_appendable() {
            return Err(DomainError::InvalidRole(role));
        }
        self.messages.push(Message::new(role, content));
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Append a turn whose role arrives as text (e.g. from a log or a wire
    /// payload). Unknown role names fail with [`DomainError::UnknownRole`].
    pub fn append_named(
        &mut self,
        role: &str,
        content: impl Into<String>,
    ) -> Result<&Message, DomainError> {
        let role: Role = role.parse()?;
        self.append(role, content)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false; a transcript is created seeded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn system_instruction(&self) -> &str {
        &self.messages[0].content
    }

    /// The scripted (user, assistant) exchange shown above the conversation.
    pub fn greeting(&self) -> (&str, &str) {
        (&self.messages[1].content, &self.messages[2].content)
    }

    /// Turns added after seeding.
    pub fn turns(&self) -> &[Message] {
        &self.messages[Self::SEED_LEN..]
    }
}
