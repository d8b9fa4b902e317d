//! HTTP boundary
//!
//! Thin plumbing around the analysis core: one POST route, a body-size
//! ceiling, CORS, and request tracing. Handlers construct a fresh analyzer
//! per request; the only shared piece is the LLM client.

mod routes;

pub use routes::{AnalyzeRequest, AnalyzeSuccess, ApiError};

use crate::config::AppConfig;
use crate::llm::LlmClient;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
}

/// Builds the application router.
///
/// # Errors
///
/// Fails if the configured CORS origin is not a valid header value.
pub fn build_router(state: AppState, config: &AppConfig) -> Result<Router> {
    let cors = match &config.cors_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS_ORIGIN value: {origin}"))?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Ok(Router::new()
        .route("/", get(routes::index))
        .route("/api/v1/analyze", post(routes::analyze))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
