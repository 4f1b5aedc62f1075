pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as resume_handlers;
use crate::matching::handlers as job_handlers;
use crate::roadmap::handlers as roadmap_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resumes/analyze",
            post(resume_handlers::handle_analyze_resume),
        )
        .route(
            "/api/v1/resumes/analyze-text",
            post(resume_handlers::handle_analyze_text),
        )
        // Jobs API
        .route("/api/v1/jobs/match", post(job_handlers::handle_match_jobs))
        // Roadmap API
        .route(
            "/api/v1/roadmap/generate",
            post(roadmap_handlers::handle_generate_roadmap),
        )
        .with_state(state)
}
