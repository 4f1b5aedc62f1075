use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::RetryPolicy;

/// Application configuration loaded from environment variables.
/// Every key is optional: a missing oracle key or job-feed credential only
/// disables that collaborator, the core keeps serving degraded results.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub adzuna_app_id: Option<String>,
    pub adzuna_app_key: Option<String>,
    pub job_feed_region: String,
    pub job_feed_results_per_page: u32,
    pub oracle_retry_base_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            adzuna_app_id: optional_env("ADZUNA_APP_ID"),
            adzuna_app_key: optional_env("ADZUNA_APP_KEY"),
            job_feed_region: std::env::var("JOB_FEED_REGION").unwrap_or_else(|_| "in".to_string()),
            job_feed_results_per_page: parse_env("JOB_FEED_RESULTS_PER_PAGE", 20)
                .context("JOB_FEED_RESULTS_PER_PAGE must be a positive integer")?,
            oracle_retry_base_ms: parse_env("ORACLE_RETRY_BASE_MS", 2000)
                .context("ORACLE_RETRY_BASE_MS must be a number of milliseconds")?,
        })
    }

    pub fn oracle_retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            base_delay: Duration::from_millis(self.oracle_retry_base_ms),
            ..RetryPolicy::default()
        }
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy_uses_configured_base() {
        let config = Config {
            port: 8080,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            adzuna_app_id: None,
            adzuna_app_key: None,
            job_feed_region: "in".to_string(),
            job_feed_results_per_page: 20,
            oracle_retry_base_ms: 250,
        };
        let policy = config.oracle_retry_policy();
        assert_eq!(policy.base_delay, Duration::from_millis(250));
        assert_eq!(policy.max_attempts, 3);
    }

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: u32 = parse_env("CAREER_API_TEST_SURELY_UNSET_KEY", 42).unwrap();
        assert_eq!(value, 42);
    }
}
