//! OpenAI-compatible chat-completions adapter (Groq by default)
//!
//! Implements the application's `LlmGateway` port over HTTPS with reqwest.
//! One request per call; nothing is cached, streamed or retried.

use super::wire::{self, ChatCompletionRequest};
use crate::config::{ApiKey, FileProviderConfig};
use async_trait::async_trait;
use orderbot_application::{GatewayError, LlmGateway};
use orderbot_domain::{Message, Model};
use reqwest::Client;
use reqwest::header::RETRY_AFTER;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct OpenAiCompatibleGateway {
    client: Client,
    endpoint: String,
    api_key: ApiKey,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl OpenAiCompatibleGateway {
    /// Build the adapter. The request timeout comes from
    /// `provider.timeout_secs`.
    pub fn new(config: &FileProviderConfig, api_key: ApiKey) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("orderbot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: Self::endpoint_for(&config.base_url),
            api_key,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn endpoint_for(base_url: &str) -> String {
        format!("{}/chat/completions", base_url.trim().trim_end_matches('/'))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request<'a>(
        &self,
        model: &'a Model,
        messages: &'a [Message],
    ) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: model.as_str(),
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    fn transport_error(e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatibleGateway {
    async fn complete(&self, model: &Model, messages: &[Message]) -> Result<String, GatewayError> {
        let request = self.build_request(model, messages);
        info!(model = %model, messages = messages.len(), "Requesting completion");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        let retry_after = wire::parse_retry_after(
            response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok()),
        );
        let body = response.text().await.map_err(Self::transport_error)?;
        debug!(status = status.as_u16(), bytes = body.len(), "Completion response received");

        if !status.is_success() {
            let error = wire::classify_status(status.as_u16(), &body, retry_after);
            warn!(status = status.as_u16(), error = %error, "Provider rejected completion request");
            return Err(error);
        }

        wire::parse_completion(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Answer exactly one HTTP request on a loopback port with the given
    /// status line, extra headers and body. Yields the raw request text.
    async fn serve_once(
        status_line: &'static str,
        extra_headers: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&request[..end]).to_lowercase();
                    let content_length = head
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "{}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n{}\r\n{}",
                status_line,
                body.len(),
                extra_headers,
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
        });

        (format!("http://{}/v1", addr), rx)
    }

    fn local_gateway(base_url: String) -> OpenAiCompatibleGateway {
        gateway(FileProviderConfig {
            base_url,
            timeout_secs: 5,
            ..Default::default()
        })
    }

    fn gateway(config: FileProviderConfig) -> OpenAiCompatibleGateway {
        OpenAiCompatibleGateway::new(&config, ApiKey::new("test-key")).unwrap()
    }

    #[test]
    fn test_default_endpoint_is_groq() {
        let gateway = gateway(FileProviderConfig::default());
        assert_eq!(
            gateway.endpoint(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let gateway = gateway(FileProviderConfig {
            base_url: "http://localhost:8080/v1/".to_string(),
            ..Default::default()
        });
        assert_eq!(gateway.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_build_request_carries_sampling_options() {
        let gateway = gateway(FileProviderConfig {
            temperature: Some(0.0),
            max_tokens: Some(300),
            ..Default::default()
        });
        let model = Model::Llama3_70b;
        let messages = vec![Message::user("one coke")];

        let request = gateway.build_request(&model, &messages);
        assert_eq!(request.model, "llama3-70b-8192");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.temperature, Some(0.0));
        assert_eq!(request.max_tokens, Some(300));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Nothing listens on the discard port.
        let gateway = gateway(FileProviderConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
            ..Default::default()
        });

        let err = gateway
            .complete(&Model::default(), &[Message::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Transport(_) | GatewayError::Timeout
        ));
        assert!(!err.is_fatal());
    }

    #[tokio::test]
    async fn test_success_returns_first_choice() {
        let (base_url, request) = serve_once(
            "HTTP/1.1 200 OK",
            "",
            r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": "Pickup or delivery?"}}]}"#,
        )
        .await;
        let gateway = local_gateway(base_url);

        let reply = gateway
            .complete(&Model::default(), &[Message::user("one large cheese pizza")])
            .await
            .unwrap();
        assert_eq!(reply, "Pickup or delivery?");

        let request = request.await.unwrap().to_lowercase();
        assert!(request.starts_with("post /v1/chat/completions "));
        assert!(request.contains("authorization: bearer test-key"));
        assert!(request.contains(r#""model":"llama3-70b-8192""#));
        assert!(request.contains("one large cheese pizza"));
    }

    #[tokio::test]
    async fn test_unauthorized_is_authentication_error() {
        let (base_url, _request) = serve_once(
            "HTTP/1.1 401 Unauthorized",
            "",
            r#"{"error": {"message": "Invalid API Key"}}"#,
        )
        .await;

        let err = local_gateway(base_url)
            .complete(&Model::default(), &[Message::user("hi")])
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::Authentication("HTTP 401: Invalid API Key".to_string())
        );
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_too_many_requests_carries_retry_after() {
        let (base_url, _request) = serve_once(
            "HTTP/1.1 429 Too Many Requests",
            "retry-after: 2\r\n",
            r#"{"error": {"message": "Rate limit reached"}}"#,
        )
        .await;

        let err = local_gateway(base_url)
            .complete(&Model::default(), &[Message::user("hi")])
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::RateLimited {
                message: "Rate limit reached".to_string(),
                retry_after: Some(Duration::from_secs(2)),
            }
        );
    }

    #[tokio::test]
    async fn test_huge_retry_after_is_still_rate_limited() {
        let (base_url, _request) = serve_once(
            "HTTP/1.1 429 Too Many Requests",
            "retry-after: 1e20\r\n",
            r#"{"error": {"message": "Rate limit reached"}}"#,
        )
        .await;

        let err = local_gateway(base_url)
            .complete(&Model::default(), &[Message::user("hi")])
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::RateLimited {
                message: "Rate limit reached".to_string(),
                retry_after: None,
            }
        );
        assert!(!err.is_fatal());
    }
}
