//! Progress notification port
//!
//! Lets the presentation layer show that a completion is in flight.

use orderbot_domain::Model;

/// Callback for the single awaited step of an interaction cycle
pub trait CompletionProgress: Send + Sync {
    /// Called right before the request is sent.
    fn on_completion_start(&self, _model: &Model, _message_count: usize) {}

    /// Called when the request finished, successfully or not.
    fn on_completion_end(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl CompletionProgress for NoProgress {}
