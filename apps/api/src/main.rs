mod config;
mod errors;
mod extraction;
mod llm_client;
mod matching;
mod models;
mod roadmap;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::pipeline::ExtractionPipeline;
use crate::llm_client::{LlmClient, Oracle};
use crate::matching::feed::{AdzunaFeed, JobFeed};
use crate::roadmap::planner::RoadmapPlanner;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career API v{}", env!("CARGO_PKG_VERSION"));

    // The oracle handle is built once and shared by extraction and planning.
    let oracle = build_oracle(&config)?;
    let job_feed = build_job_feed(&config)?;

    let state = AppState {
        pipeline: Arc::new(ExtractionPipeline::new(
            oracle.clone(),
            config.oracle_retry_policy(),
        )),
        planner: Arc::new(RoadmapPlanner::new(oracle)),
        job_feed,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_oracle(config: &Config) -> Result<Option<Arc<dyn Oracle>>> {
    match &config.anthropic_api_key {
        Some(key) => {
            let client: Arc<dyn Oracle> = Arc::new(LlmClient::new(key.clone())?);
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Ok(Some(client))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; extraction and roadmaps use offline fallbacks");
            Ok(None)
        }
    }
}

fn build_job_feed(config: &Config) -> Result<Option<Arc<dyn JobFeed>>> {
    match (&config.adzuna_app_id, &config.adzuna_app_key) {
        (Some(app_id), Some(app_key)) => {
            let feed: Arc<dyn JobFeed> = Arc::new(AdzunaFeed::new(
                app_id.clone(),
                app_key.clone(),
                config.job_feed_results_per_page,
            )?);
            info!("Job feed initialized (region: {})", config.job_feed_region);
            Ok(Some(feed))
        }
        _ => {
            warn!("ADZUNA_APP_ID / ADZUNA_APP_KEY not set; job matching returns no results");
            Ok(None)
        }
    }
}
