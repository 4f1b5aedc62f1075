/// LLM Client: the single point of entry for all oracle calls in the career API.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Extraction and roadmap planning depend on the `Oracle` trait, never on this
/// concrete client, so the handle is injected at startup and faked in tests.
///
/// Model: claude-sonnet-4-5, fixed in `MODEL`.
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

use prompts::JSON_ONLY_SYSTEM;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all oracle calls.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} attempts")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("No oracle client is configured")]
    Unavailable,
}

impl LlmError {
    /// Quota / rate-limit class failures are the only retryable ones.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            LlmError::Api { status, .. } => *status == 429,
            LlmError::RateLimited { .. } => true,
            _ => false,
        }
    }

    /// True when the oracle answered but the answer could not be used.
    pub fn is_malformed(&self) -> bool {
        matches!(self, LlmError::Parse(_) | LlmError::EmptyContent)
    }

    /// Coarse failure class for logs: unavailable, transient, malformed or transport.
    pub fn kind(&self) -> &'static str {
        if matches!(self, LlmError::Unavailable) {
            "unavailable"
        } else if self.is_rate_limited() {
            "transient"
        } else if self.is_malformed() {
            "malformed"
        } else {
            "transport"
        }
    }
}

/// An external structured-text generator. Returns raw text, expected to be
/// JSON (possibly wrapped in markdown fences).
#[async_trait]
pub trait Oracle: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API. One HTTP attempt per call; retry policy
/// belongs to the caller (see `retry_rate_limited`).
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, api_key })
    }

    /// Makes a single raw call to the Claude API, returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("LLM API returned {}: {}", status, message);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl Oracle for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, JSON_ONLY_SYSTEM).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Bounded retry for rate-limit failures: `max_attempts` total, waiting
/// `base_delay`, then twice that, and so on between attempts.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * (1u32 << (attempt - 1))
    }
}

/// Runs `op` until it succeeds, fails with a non-rate-limit error, or the
/// policy's attempts are used up.
pub async fn retry_rate_limited<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, LlmError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, LlmError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_rate_limited() && attempt < max_attempts => {
                let delay = policy.delay_after(attempt);
                warn!(
                    "Oracle rate limited on attempt {}, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) if e.is_rate_limited() => {
                return Err(LlmError::RateLimited { retries: attempt });
            }
            Err(e) => return Err(e),
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn rate_limited() -> LlmError {
        LlmError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        }
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_error_classification() {
        assert!(rate_limited().is_rate_limited());
        assert!(LlmError::RateLimited { retries: 3 }.is_rate_limited());
        assert!(!LlmError::Api {
            status: 500,
            message: String::new()
        }
        .is_rate_limited());
        assert!(LlmError::EmptyContent.is_malformed());
        assert!(!LlmError::Unavailable.is_malformed());
        assert_eq!(LlmError::Unavailable.kind(), "unavailable");
        assert_eq!(rate_limited().kind(), "transient");
        assert_eq!(LlmError::EmptyContent.kind(), "malformed");
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_gives_up_after_three_attempts_with_doubling_backoff() {
        let calls = AtomicU32::new(0);
        let start = tokio::time::Instant::now();
        let result: Result<(), LlmError> = retry_rate_limited(&RetryPolicy::default(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(rate_limited()) }
        })
        .await;

        assert!(matches!(result, Err(LlmError::RateLimited { retries: 3 })));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // 2s + 4s of backoff
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(6), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_secs(7), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_recovers_after_rate_limit() {
        let calls = AtomicU32::new(0);
        let result = retry_rate_limited(&RetryPolicy::default(), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(rate_limited())
                } else {
                    Ok("done")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_non_rate_limit_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<(), LlmError> = retry_rate_limited(&RetryPolicy::default(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                Err(LlmError::Api {
                    status: 500,
                    message: "boom".to_string(),
                })
            }
        })
        .await;

        assert!(matches!(result, Err(LlmError::Api { status: 500, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
