//! Job Feed: external job-search collaborator.
//!
//! A feed never fails outward: fetch and decode errors are logged and become
//! an empty listing set, so matching degrades to "zero results".

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::job::{JobId, JobListing};

const ADZUNA_API_BASE: &str = "https://api.adzuna.com/v1/api/jobs";
const FEED_TIMEOUT_SECS: u64 = 10;
pub const MAX_DESCRIPTION_CHARS: usize = 500;

#[async_trait]
pub trait JobFeed: Send + Sync {
    async fn search(&self, query: &str, region: &str) -> Vec<JobListing>;
}

/// Adzuna job-search API client.
pub struct AdzunaFeed {
    client: Client,
    app_id: String,
    app_key: String,
    results_per_page: u32,
}

impl AdzunaFeed {
    pub fn new(app_id: String, app_key: String, results_per_page: u32) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(FEED_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            app_id,
            app_key,
            results_per_page,
        })
    }

    async fn fetch(&self, query: &str, region: &str) -> Result<AdzunaResponse, reqwest::Error> {
        let url = format!("{ADZUNA_API_BASE}/{region}/search/1");
        let results_per_page = self.results_per_page.to_string();
        self.client
            .get(url)
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("results_per_page", results_per_page.as_str()),
                ("what", query),
                ("content-type", "application/json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<AdzunaResponse>()
            .await
    }
}

#[async_trait]
impl JobFeed for AdzunaFeed {
    async fn search(&self, query: &str, region: &str) -> Vec<JobListing> {
        match self.fetch(query, region).await {
            Ok(response) => {
                let listings = response.into_listings();
                info!(
                    "Job feed returned {} listings for '{}' in '{}'",
                    listings.len(),
                    query,
                    region
                );
                listings
            }
            Err(e) => {
                warn!("Error fetching jobs for '{query}': {e}");
                vec![]
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct AdzunaResponse {
    #[serde(default)]
    results: Vec<AdzunaJob>,
}

#[derive(Debug, Deserialize)]
struct AdzunaJob {
    id: Option<JobId>,
    title: Option<String>,
    company: Option<DisplayName>,
    location: Option<DisplayName>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    description: Option<String>,
    redirect_url: Option<String>,
    created: Option<String>,
    contract_type: Option<String>,
    category: Option<Label>,
}

#[derive(Debug, Deserialize)]
struct DisplayName {
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Label {
    label: Option<String>,
}

impl AdzunaResponse {
    fn into_listings(self) -> Vec<JobListing> {
        self.results
            .into_iter()
            .enumerate()
            .map(|(idx, job)| job.into_listing(idx + 1))
            .collect()
    }
}

impl AdzunaJob {
    /// `position` is 1-based and only used to synthesize a missing id.
    fn into_listing(self, position: usize) -> JobListing {
        let description = self
            .description
            .filter(|d| !d.is_empty())
            .map(|d| truncate_chars(&d, MAX_DESCRIPTION_CHARS))
            .unwrap_or_else(|| "No description".to_string());

        JobListing {
            id: self
                .id
                .unwrap_or_else(|| JobId::Text(format!("adzuna_{position}"))),
            title: self.title.unwrap_or_default(),
            company: self
                .company
                .and_then(|c| c.display_name)
                .unwrap_or_else(|| "Company Name".to_string()),
            location: self
                .location
                .and_then(|l| l.display_name)
                .unwrap_or_else(|| "Remote".to_string()),
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            description,
            apply_link: self.redirect_url,
            category: self
                .category
                .and_then(|c| c.label)
                .unwrap_or_else(|| "General".to_string()),
            posted_date: self
                .created
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc)),
            contract_type: self.contract_type,
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
