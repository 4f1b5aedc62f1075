use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The feed's own identifier, passed through untouched. Feeds disagree on
/// whether ids are strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    Number(i64),
    Text(String),
}

/// Immutable snapshot of an external job record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    /// Truncated to 500 characters at ingestion.
    pub description: String,
    pub apply_link: Option<String>,
    pub category: String,
    pub posted_date: Option<DateTime<Utc>>,
    pub contract_type: Option<String>,
}

/// A listing annotated with how well it matches a profile's skills.
/// Recomputed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedJob {
    #[serde(flatten)]
    pub listing: JobListing,
    /// Display form of the salary range, e.g. "$50,000 - $80,000".
    pub salary: String,
    pub match_percentage: u32,
    pub matching_skills: Vec<String>,
    /// User skills this listing's text never mentions (not the listing's unmet
    /// requirements).
    pub missing_skills: Vec<String>,
}
