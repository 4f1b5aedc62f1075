//! Axum route handlers for the Roadmap API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::roadmap::Roadmap;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub job_role: String,
    #[serde(default)]
    pub technical_skills: Vec<String>,
}

/// POST /api/v1/roadmap/generate
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<Roadmap>, AppError> {
    if request.job_role.trim().is_empty() {
        return Err(AppError::Validation("job_role cannot be empty".to_string()));
    }

    let roadmap = state
        .planner
        .plan(&request.job_role, &request.technical_skills)
        .await;
    Ok(Json(roadmap))
}
