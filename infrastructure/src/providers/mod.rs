//! Completion provider adapters

pub mod openai_compat;
pub mod wire;

pub use openai_compat::OpenAiCompatibleGateway;
