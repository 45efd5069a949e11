//! Order parameters: per-cycle settings for the order conversation.
//!
//! [`OrderParams`] groups the static parameters read by
//! [`TakeOrderUseCase`](crate::use_cases::take_order::TakeOrderUseCase).
//! These are application-layer concerns, not domain policy.

use orderbot_domain::Model;

/// Default upper bound on one customer message, in characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 2000;

/// Parameters for each interaction cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderParams {
    /// Model identifier sent with every completion request.
    pub model: Model,
    /// Longest accepted customer message, counted in characters after trimming.
    pub max_input_chars: usize,
}

impl Default for OrderParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl OrderParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = OrderParams::default();
        assert_eq!(params.model, Model::Llama3_70b);
        assert_eq!(params.max_input_chars, 2000);
    }

    #[test]
    fn test_builder_chain() {
        let params = OrderParams::default()
            .with_model(Model::Llama31_8bInstant)
            .with_max_input_chars(80);
        assert_eq!(params.model, Model::Llama31_8bInstant);
        assert_eq!(params.max_input_chars, 80);
    }
}
