//! Take Order use case.
//!
//! Runs one interaction cycle of the order conversation:
//!
//! 1. Validate the customer's line (non-empty, within `max_input_chars`)
//! 2. Append the user turn
//! 3. Send the whole transcript to the model
//! 4. On success append the assistant turn and record the pair for display;
//!    on failure append nothing more
//!
//! The user turn stays in the transcript when the completion fails, so a
//! retry by the customer still carries the full context.

use crate::config::OrderParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::CompletionProgress;
use crate::use_cases::order_session::{InFlight, OrderSession};
use orderbot_domain::util::preview;
use orderbot_domain::{DomainError, Role};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can end an interaction cycle.
#[derive(Error, Debug)]
pub enum TakeOrderError {
    #[error("Please type something before sending")]
    EmptyInput,

    #[error("Message is too long ({len} characters, the limit is {max})")]
    InputTooLong { len: usize, max: usize },

    #[error("Still waiting for the previous reply")]
    Busy,

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Conversation invariant violated: {0}")]
    Domain(#[from] DomainError),
}

impl TakeOrderError {
    /// The session cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        match self {
            TakeOrderError::Domain(_) => true,
            TakeOrderError::Gateway(e) => e.is_fatal(),
            _ => false,
        }
    }

    /// Rejected before anything was appended to the transcript.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            TakeOrderError::EmptyInput | TakeOrderError::InputTooLong { .. } | TakeOrderError::Busy
        )
    }
}

/// Use case driving the order conversation.
pub struct TakeOrderUseCase {
    gateway: Arc<dyn LlmGateway>,
    params: OrderParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for TakeOrderUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            params: self.params.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl TakeOrderUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: OrderParams) -> Self {
        Self {
            gateway,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &OrderParams {
        &self.params
    }

    /// Open a new conversation seeded with the OrderBot instruction.
    pub fn start_session(&self) -> OrderSession {
        let session = OrderSession::new();
        info!(model = %self.params.model, "Order session started");
        self.conversation_logger.log(ConversationEvent::new(
            "session_started",
            serde_json::json!({
                "model": self.params.model.as_str(),
                "seed": session.transcript().messages(),
            }),
        ));
        session
    }

    /// Run one interaction cycle and return the assistant's reply.
    pub async fn execute(
        &self,
        session: &mut OrderSession,
        input: &str,
        progress: &dyn CompletionProgress,
    ) -> Result<String, TakeOrderError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TakeOrderError::EmptyInput);
        }
        let len = input.chars().count();
        if len > self.params.max_input_chars {
            return Err(TakeOrderError::InputTooLong {
                len,
                max: self.params.max_input_chars,
            });
        }
        if !session.state.is_idle() {
            return Err(TakeOrderError::Busy);
        }

        session.transcript.append(Role::User, input)?;
        let turn_index = session.transcript.len() - 1;
        debug!(turn = turn_index, "User: {}", preview(input, 80));
        self.conversation_logger.log(ConversationEvent::new(
            "user_turn",
            serde_json::json!({ "index": turn_index, "content": input }),
        ));

        let reply = {
            let _cycle = InFlight::begin(&mut session.state);
            let messages = session.transcript.messages();
            progress.on_completion_start(&self.params.model, messages.len());
            let reply = match self.gateway.complete(&self.params.model, messages).await {
                Ok(reply) if reply.trim().is_empty() => Err(GatewayError::Provider(
                    "model returned an empty completion".to_string(),
                )),
                other => other,
            };
            progress.on_completion_end(reply.is_ok());
            reply
        };

        match reply {
            Ok(reply) => {
                session.transcript.append(Role::Assistant, reply.as_str())?;
                session.display.record(input, reply.as_str());
                debug!(
                    turn = session.transcript.len() - 1,
                    "Assistant: {}",
                    preview(&reply, 80)
                );
                self.conversation_logger.log(ConversationEvent::new(
                    "assistant_turn",
                    serde_json::json!({
                        "index": session.transcript.len() - 1,
                        "content": reply,
                    }),
                ));
                Ok(reply)
            }
            Err(e) => {
                warn!(error = %e, transcript_len = session.transcript.len(), "Completion failed");
                self.conversation_logger.log(ConversationEvent::new(
                    "completion_failed",
                    serde_json::json!({
                        "error": e.to_string(),
                        "transcript_len": session.transcript.len(),
                    }),
                ));
                Err(TakeOrderError::Gateway(e))
            }
        }
    }
}
