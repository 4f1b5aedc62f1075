//! Extraction Pipeline: the fallback ladder from raw resume text to a profile.
//!
//! Rungs are tried in order: oracle, then deterministic keyword extraction.
//! When every rung fails the fixed stub profile is returned, so callers
//! always receive a `StructuredProfile`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::extraction::deterministic;
use crate::extraction::oracle::OracleExtractor;
use crate::llm_client::{LlmError, Oracle, RetryPolicy};
use crate::models::profile::{ProfileSource, StructuredProfile};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("oracle extraction failed ({}): {0}", .0.kind())]
    Oracle(#[from] LlmError),

    #[error("every extraction strategy failed")]
    Exhausted,
}

/// One rung of the ladder.
#[async_trait]
pub trait ExtractionStrategy: Send + Sync {
    fn source(&self) -> ProfileSource;

    async fn extract(&self, text: &str) -> Result<StructuredProfile, ExtractionError>;
}

#[async_trait]
impl ExtractionStrategy for OracleExtractor {
    fn source(&self) -> ProfileSource {
        ProfileSource::Oracle
    }

    async fn extract(&self, text: &str) -> Result<StructuredProfile, ExtractionError> {
        Ok(OracleExtractor::extract(self, text).await?)
    }
}

/// Keyword extraction over the skill taxonomy. Never fails.
pub struct DeterministicExtractor;

#[async_trait]
impl ExtractionStrategy for DeterministicExtractor {
    fn source(&self) -> ProfileSource {
        ProfileSource::Deterministic
    }

    async fn extract(&self, text: &str) -> Result<StructuredProfile, ExtractionError> {
        Ok(deterministic::extract(text))
    }
}

/// A profile together with the rung that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionOutcome {
    pub profile: StructuredProfile,
    pub source: ProfileSource,
}

pub struct ExtractionPipeline {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl ExtractionPipeline {
    /// The standard ladder: oracle (fails fast with `Unavailable` when no
    /// handle is configured), then deterministic extraction.
    pub fn new(oracle: Option<Arc<dyn Oracle>>, retry: RetryPolicy) -> Self {
        Self::with_strategies(vec![
            Box::new(OracleExtractor::new(oracle, retry)),
            Box::new(DeterministicExtractor),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Runs the ladder. Never fails: total failure yields the stub profile.
    pub async fn extract(&self, text: &str) -> ExtractionOutcome {
        match self.try_strategies(text).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("{e}; returning stub profile");
                ExtractionOutcome {
                    profile: StructuredProfile::stub(),
                    source: ProfileSource::Stub,
                }
            }
        }
    }

    async fn try_strategies(&self, text: &str) -> Result<ExtractionOutcome, ExtractionError> {
        for strategy in &self.strategies {
            let source = strategy.source();
            match strategy.extract(text).await {
                Ok(profile) => {
                    info!("Resume extracted via {:?} strategy", source);
                    return Ok(ExtractionOutcome { profile, source });
                }
                Err(e) => {
                    warn!("{:?} extraction failed ({e}), falling back", source);
                }
            }
        }
        Err(ExtractionError::Exhausted)
    }
}
