//! Application-level configuration.
//!
//! - [`OrderParams`]: model and input bounds for each interaction cycle

pub mod order_params;

pub use order_params::{DEFAULT_MAX_INPUT_CHARS, OrderParams};
