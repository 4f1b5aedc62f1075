use std::sync::Arc;

use crate::config::Config;
use crate::extraction::pipeline::ExtractionPipeline;
use crate::matching::feed::JobFeed;
use crate::roadmap::planner::RoadmapPlanner;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pipeline: Arc<ExtractionPipeline>,
    pub planner: Arc<RoadmapPlanner>,
    /// `None` when feed credentials are not configured; matching then returns no jobs.
    pub job_feed: Option<Arc<dyn JobFeed>>,
}
