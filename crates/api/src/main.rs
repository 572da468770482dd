use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use tracing_subscriber::EnvFilter;

use story::{AppConfig, ErrorKind, StoryPipeline, StoryResponse};
use summarize::{Language, LanguageResources};
use wiki::WikipediaClient;

/// HTTP front end for the story summarizer.
#[derive(Parser, Debug)]
#[command(name = "story-api")]
#[command(version)]
struct Args {
    /// Path to a JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

struct AppState {
    pipeline: StoryPipeline,
    /// Same client the pipeline looks articles up with.
    wikipedia: Arc<WikipediaClient>,
}

#[derive(Deserialize)]
struct StoryRequest {
    #[serde(default)]
    title: String,
}

#[derive(Serialize)]
struct HealthResponse {
    wikipedia: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.server.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Language resources are loaded once, before any request
    let resources = Arc::new(LanguageResources::load(Language::English));
    let wikipedia = Arc::new(WikipediaClient::new(
        config.wiki.api_url.clone(),
        &config.wiki.user_agent,
        config.wiki.request_timeout(),
    )?);
    let pipeline = StoryPipeline::with_source(&config, wikipedia.clone(), resources);

    let state = Arc::new(AppState { pipeline, wikipedia });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;

    tracing::info!("Server listening on http://{}", config.server.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/story", post(get_story))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match state.wikipedia.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                wikipedia: "ok".to_string(),
            }),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                wikipedia: format!("error: {:#}", e),
            }),
        ),
    }
}

async fn get_story(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StoryRequest>,
) -> (StatusCode, Json<StoryResponse>) {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("story", %request_id, title = %req.title);

    let response = state.pipeline.respond(&req.title).instrument(span).await;
    (status_for(&response), Json(response))
}

fn status_for(response: &StoryResponse) -> StatusCode {
    match response {
        StoryResponse::Summary(_) => StatusCode::OK,
        StoryResponse::Error(err) => match err.kind {
            ErrorKind::EmptyQuery => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Ambiguous => StatusCode::CONFLICT,
            ErrorKind::Backend => StatusCode::BAD_GATEWAY,
        },
    }
}
