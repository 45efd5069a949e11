//! Application layer for orderbot
//!
//! This crate contains the order-taking use case, the per-session context it
//! drives, and the port definitions adapters implement.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::OrderParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{CompletionProgress, NoProgress},
};
pub use use_cases::order_session::OrderSession;
pub use use_cases::take_order::{TakeOrderError, TakeOrderUseCase};
