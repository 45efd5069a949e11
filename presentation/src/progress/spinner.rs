//! Spinner shown while a completion is in flight

use indicatif::{ProgressBar, ProgressStyle};
use orderbot_application::CompletionProgress;
use orderbot_domain::Model;
use std::sync::Mutex;
use std::time::Duration;

const MESSAGE: &str = "Generating response…";

/// Reports the awaited completion with an indicatif spinner.
///
/// The spinner is also cleared on drop, so an abandoned cycle does not
/// leave it running.
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionProgress for SpinnerProgress {
    fn on_completion_start(&self, _model: &Model, _message_count: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(MESSAGE);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock()
            && let Some(previous) = bar.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_completion_end(&self, _success: bool) {
        self.clear();
    }
}

impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        self.clear();
    }
}
