//! Request handlers for the analysis API

use super::AppState;
use crate::analysis::{AnalysisReport, ComplexityAnalyzer};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Inbound analysis request.
///
/// Fields default to empty strings so a missing key gets the canonical
/// boundary error instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeSuccess {
    pub success: bool,
    pub analysis: AnalysisReport,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub message: String,
}

pub async fn index() -> &'static str {
    "algolens complexity analysis service"
}

/// `POST /api/v1/analyze`
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    if request.language.trim().is_empty() || request.code.trim().is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Both language and code are required",
        );
    }

    info!(
        language = %request.language,
        code_bytes = request.code.len(),
        "analysis requested"
    );

    let analyzer = ComplexityAnalyzer::new(state.llm.clone());
    match analyzer.analyze(&request.language, &request.code).await {
        Ok(analysis) => (
            StatusCode::OK,
            Json(AnalyzeSuccess {
                success: true,
                analysis,
            }),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "complexity analysis failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiError {
            success: false,
            message: message.into(),
        }),
    )
        .into_response()
}
