//! Domain error types

use crate::conversation::entities::Role;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A role that may not be appended after the transcript is seeded.
    #[error("Role '{0}' cannot be appended to a transcript (only user and assistant turns)")]
    InvalidRole(Role),

    /// A role string that names no known role at all (e.g. "tool").
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

impl DomainError {
    /// Both variants are the same contract violation: a turn with a role
    /// outside {user, assistant}.
    pub fn is_invalid_role(&self) -> bool {
        matches!(self, DomainError::InvalidRole(_) | DomainError::UnknownRole(_))
    }
}
