//! Interaction-cycle state

use serde::{Deserialize, Serialize};

/// Where a session is in its interaction cycle.
///
/// ```text
/// Idle --submit(non-empty)--> AwaitingCompletion --reply | error--> Idle
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingCompletion,
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::AwaitingCompletion => write!(f, "awaiting completion"),
        }
    }
}
