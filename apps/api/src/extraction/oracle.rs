//! Oracle Extractor: resume extraction through the external LLM.
//!
//! Only rate-limit failures are retried (see `RetryPolicy`); malformed output
//! and transport errors surface immediately so the pipeline can fall back.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::extraction::prompts::RESUME_PARSE_PROMPT_TEMPLATE;
use crate::llm_client::prompts::NO_INVENTION_INSTRUCTION;
use crate::llm_client::{retry_rate_limited, strip_json_fences, LlmError, Oracle, RetryPolicy};
use crate::models::profile::StructuredProfile;

/// Resume text beyond this many characters is not sent to the oracle.
pub const MAX_PROMPT_CHARS: usize = 10_000;

pub struct OracleExtractor {
    oracle: Option<Arc<dyn Oracle>>,
    retry: RetryPolicy,
}

impl OracleExtractor {
    pub fn new(oracle: Option<Arc<dyn Oracle>>, retry: RetryPolicy) -> Self {
        Self { oracle, retry }
    }

    pub async fn extract(&self, text: &str) -> Result<StructuredProfile, LlmError> {
        let oracle: &dyn Oracle = self.oracle.as_deref().ok_or(LlmError::Unavailable)?;
        let prompt = build_prompt(text);
        let prompt = prompt.as_str();

        info!("Requesting oracle resume extraction ({} chars)", prompt.len());
        let raw = retry_rate_limited(&self.retry, move || oracle.generate(prompt)).await?;

        let profile: StructuredProfile = serde_json::from_str(strip_json_fences(&raw))
            .map_err(|e| {
                warn!("Oracle returned malformed profile JSON: {e}");
                LlmError::Parse(e)
            })?;

        debug!(
            "Oracle extracted {} technical skills, role '{}'",
            profile.technical_skills.len(),
            profile.job_role
        );
        Ok(profile.normalized())
    }
}

fn build_prompt(text: &str) -> String {
    let truncated: String = text.chars().take(MAX_PROMPT_CHARS).collect();
    RESUME_PARSE_PROMPT_TEMPLATE
        .replace("{no_invention}", NO_INVENTION_INSTRUCTION)
        .replace("{resume_text}", &truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Replays canned responses in order and records every prompt it sees.
    struct ScriptedOracle {
        responses: Mutex<Vec<Result<String, LlmError>>>,
        calls: AtomicU32,
        last_prompt: Mutex<String>,
    }

    impl ScriptedOracle {
        fn new(mut responses: Vec<Result<String, LlmError>>) -> Arc<Self> {
            responses.reverse();
            Arc::new(Self {
                responses: Mutex::new(responses),
                calls: AtomicU32::new(0),
                last_prompt: Mutex::new(String::new()),
            })
        }
    }

    #[async_trait]
    impl Oracle for ScriptedOracle {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = prompt.to_string();
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }

    const PROFILE_JSON: &str = r#"{
        "name": "Jane Doe",
        "email": "jane@example.com",
        "technical_skills": ["Rust", "PostgreSQL", "rust"],
        "soft_skills": ["Mentoring"],
        "projects": ["Built a ledger service"],
        "experience": "Four years building payment systems.",
        "job_role": "Backend Developer"
    }"#;

    fn fast_retry() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(10),
        }
    }

    fn rate_limited() -> LlmError {
        LlmError::Api {
            status: 429,
            message: "Resource exhausted".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_oracle_is_unavailable() {
        let extractor = OracleExtractor::new(None, fast_retry());
        let err = extractor.extract("resume").await.unwrap_err();
        assert!(matches!(err, LlmError::Unavailable));
    }

    #[tokio::test]
    async fn test_fenced_json_is_parsed_and_normalized() {
        let oracle = ScriptedOracle::new(vec![Ok(format!("```json\n{PROFILE_JSON}\n```"))]);
        let extractor = OracleExtractor::new(Some(oracle.clone()), fast_retry());

        let profile = extractor.extract("Jane Doe resume").await.unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.technical_skills, vec!["rust", "postgresql"]);
        assert_eq!(profile.soft_skills, vec!["Mentoring"]);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_output_is_not_retried() {
        let oracle = ScriptedOracle::new(vec![
            Ok("Sorry, I cannot help with that.".to_string()),
            Ok(PROFILE_JSON.to_string()),
        ]);
        let extractor = OracleExtractor::new(Some(oracle.clone()), fast_retry());

        let err = extractor.extract("resume").await.unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_key_is_malformed() {
        let oracle = ScriptedOracle::new(vec![Ok(r#"{"name": "Jane"}"#.to_string())]);
        let extractor = OracleExtractor::new(Some(oracle), fast_retry());
        assert!(extractor.extract("resume").await.unwrap_err().is_malformed());
    }

    #[tokio::test]
    async fn test_rate_limit_is_retried_until_success() {
        let oracle = ScriptedOracle::new(vec![
            Err(rate_limited()),
            Err(rate_limited()),
            Ok(PROFILE_JSON.to_string()),
        ]);
        let extractor = OracleExtractor::new(Some(oracle.clone()), fast_retry());

        let profile = extractor.extract("resume").await.unwrap();
        assert_eq!(profile.email, "jane@example.com");
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_rate_limit_gives_up_after_three_attempts() {
        let oracle = ScriptedOracle::new(vec![
            Err(rate_limited()),
            Err(rate_limited()),
            Err(rate_limited()),
            Ok(PROFILE_JSON.to_string()),
        ]);
        let extractor = OracleExtractor::new(Some(oracle.clone()), fast_retry());

        let err = extractor.extract("resume").await.unwrap_err();
        assert!(matches!(err, LlmError::RateLimited { retries: 3 }));
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_prompt_embeds_at_most_ten_thousand_chars() {
        let oracle = ScriptedOracle::new(vec![Ok(PROFILE_JSON.to_string())]);
        let extractor = OracleExtractor::new(Some(oracle.clone()), fast_retry());

        let text = format!("{}{}", "a".repeat(MAX_PROMPT_CHARS), "TAILMARKER");
        extractor.extract(&text).await.unwrap();

        let prompt = oracle.last_prompt.lock().unwrap().clone();
        assert!(prompt.contains(&"a".repeat(MAX_PROMPT_CHARS)));
        assert!(!prompt.contains("TAILMARKER"));
        assert!(prompt.contains("DO NOT INVENT"));
    }
}
