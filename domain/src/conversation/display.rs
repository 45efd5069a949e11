//! Rendering projection of completed interaction cycles

/// One bubble handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayEntry<'a> {
    pub is_user: bool,
    pub text: &'a str,
}

/// Parallel user/assistant sequences; index `i` is interaction cycle `i`.
///
/// Only successful cycles are recorded, so both sequences always have the
/// same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLog {
    past: Vec<String>,
    generated: Vec<String>,
}

impl DisplayLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed cycle.
    pub fn record(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.past.push(user.into());
        self.generated.push(assistant.into());
    }

    pub fn len(&self) -> usize {
        self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty()
    }

    pub fn user_utterances(&self) -> &[String] {
        &self.past
    }

    pub fn assistant_replies(&self) -> &[String] {
        &self.generated
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.past
            .iter()
            .zip(&self.generated)
            .map(|(u, a)| (u.as_str(), a.as_str()))
    }

    /// The most recent cycle, if any.
    pub fn last_pair(&self) -> Option<(&str, &str)> {
        self.pairs().last()
    }

    /// Flatten into alternating bubbles, oldest first.
    pub fn entries(&self) -> Vec<DisplayEntry<'_>> {
        self.pairs()
            .flat_map(|(user, assistant)| {
                [
                    DisplayEntry {
                        is_user: true,
                        text: user,
                    },
                    DisplayEntry {
                        is_user: false,
                        text: assistant,
                    },
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_sequences_parallel() {
        let mut log = DisplayLog::new();
        assert!(log.is_empty());

        log.record("one cheese pizza", "Small, medium or large?");
        log.record("large", "Pickup or delivery?");

        assert_eq!(log.len(), 2);
        assert_eq!(log.user_utterances(), ["one cheese pizza", "large"]);
        assert_eq!(
            log.assistant_replies(),
            ["Small, medium or large?", "Pickup or delivery?"]
        );
        assert_eq!(log.last_pair(), Some(("large", "Pickup or delivery?")));
    }

    #[test]
    fn test_entries_alternate_user_then_assistant() {
        let mut log = DisplayLog::new();
        log.record("hi", "hello");
        log.record("fries", "Large or small?");

        let flags: Vec<bool> = log.entries().iter().map(|e| e.is_user).collect();
        assert_eq!(flags, [true, false, true, false]);
        assert_eq!(log.entries()[3].text, "Large or small?");
    }
}
