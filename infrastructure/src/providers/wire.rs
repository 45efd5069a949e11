//! OpenAI-compatible chat-completions wire format
//!
//! Request: `{"model": ..., "messages": [{"role", "content"}...]}`.
//! Response: text at `choices[0].message.content`. Anything else is a
//! [`GatewayError::Provider`].

use orderbot_application::GatewayError;
use orderbot_domain::Message;
use orderbot_domain::util::preview;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request body. Domain messages already serialize as `{role, content}`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the first choice's text from a 2xx response body.
pub fn parse_completion(body: &str) -> Result<String, GatewayError> {
    let response: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        GatewayError::Provider(format!(
            "malformed completion response ({}): {}",
            e,
            preview(body, 200)
        ))
    })?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| GatewayError::Provider("completion response had no choices".to_string()))?;

    if content.trim().is_empty() {
        return Err(GatewayError::Provider(
            "model returned an empty completion".to_string(),
        ));
    }
    Ok(content)
}

/// Human-readable reason from an error body: `error.message` when present,
/// otherwise the start of the raw body.
pub fn provider_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "(empty response body)".to_string(),
        Err(_) => preview(body.trim(), 200).into_owned(),
    }
}

/// Map a non-2xx status to a gateway error.
pub fn classify_status(status: u16, body: &str, retry_after: Option<Duration>) -> GatewayError {
    let message = provider_message(body);
    match status {
        401 | 403 => GatewayError::Authentication(format!("HTTP {}: {}", status, message)),
        429 => GatewayError::RateLimited {
            message,
            retry_after,
        },
        _ => GatewayError::Provider(format!("HTTP {}: {}", status, message)),
    }
}

/// `Retry-After` in seconds (integer or fractional). HTTP-date values and
/// values that do not fit in a `Duration` are ignored.
pub fn parse_retry_after(value: Option<&str>) -> Option<Duration> {
    let secs: f64 = value?.trim().parse().ok()?;
    Duration::try_from_secs_f64(secs).ok()
}
