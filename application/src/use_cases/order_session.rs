//! Per-connection conversation context.

use orderbot_domain::{DisplayLog, SessionState, Transcript};

/// Everything one customer's conversation owns.
///
/// Created by [`TakeOrderUseCase::start_session`] and passed by `&mut` into
/// every cycle. Nothing is shared between sessions and nothing outlives the
/// value.
///
/// [`TakeOrderUseCase::start_session`]: super::take_order::TakeOrderUseCase::start_session
#[derive(Debug, Clone)]
pub struct OrderSession {
    pub(crate) transcript: Transcript,
    pub(crate) display: DisplayLog,
    pub(crate) state: SessionState,
}

impl OrderSession {
    /// A freshly seeded, idle session.
    pub fn new() -> Self {
        Self {
            transcript: Transcript::initialize(),
            display: DisplayLog::new(),
            state: SessionState::Idle,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn display_log(&self) -> &DisplayLog {
        &self.display
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of completed cycles.
    pub fn completed_cycles(&self) -> usize {
        self.display.len()
    }
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Marks a session as awaiting completion for as long as it lives.
///
/// Dropping it, including when the cycle's future is abandoned mid-request,
/// puts the session back to `Idle`.
pub(crate) struct InFlight<'a> {
    state: &'a mut SessionState,
}

impl<'a> InFlight<'a> {
    pub(crate) fn begin(state: &'a mut SessionState) -> Self {
        *state = SessionState::AwaitingCompletion;
        Self { state }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_seeded_and_idle() {
        let session = OrderSession::new();
        assert_eq!(session.transcript().len(), Transcript::SEED_LEN);
        assert!(session.display_log().is_empty());
        assert!(session.state().is_idle());
        assert_eq!(session.completed_cycles(), 0);
    }

    #[test]
    fn test_in_flight_resets_on_drop() {
        let mut session = OrderSession::new();
        {
            let _cycle = InFlight::begin(&mut session.state);
        }
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_in_flight_sets_awaiting() {
        let mut state = SessionState::Idle;
        let cycle = InFlight::begin(&mut state);
        assert_eq!(*cycle.state, SessionState::AwaitingCompletion);
    }
}
