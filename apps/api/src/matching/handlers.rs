//! Axum route handlers for the Jobs API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::matcher::{build_search_query, match_jobs};
use crate::models::job::MatchedJob;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchJobsRequest {
    #[serde(default)]
    pub job_role: String,
    #[serde(default)]
    pub technical_skills: Vec<String>,
    /// Feed region code; defaults to `JOB_FEED_REGION`.
    pub region: Option<String>,
}

/// POST /api/v1/jobs/match
///
/// Searches the job feed with the profile's role and top skills, then ranks
/// the listings by skill overlap. Feed failures yield an empty list.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(request): Json<MatchJobsRequest>,
) -> Result<Json<Vec<MatchedJob>>, AppError> {
    let Some(feed) = state.job_feed.as_ref() else {
        info!("No job feed configured, returning no matches");
        return Ok(Json(vec![]));
    };

    let query = build_search_query(&request.job_role, &request.technical_skills);
    let region = request
        .region
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(&state.config.job_feed_region);

    let listings = feed.search(&query, region).await;
    Ok(Json(match_jobs(&request.technical_skills, listings)))
}
