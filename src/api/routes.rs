use axum::{
    routing::post,
    Router,
    extract::{Json, State},
    response::IntoResponse,
    http::StatusCode,
};
use tower_http::cors::{CorsLayer, Any};
use chrono::Utc;

use crate::error::{Result, AppError};
use crate::api::models::{ScoreRequest, ScoreResponse};
use crate::api::response;
use crate::config::Config;
use crate::scoring;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/score", post(score_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn score_handler(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> impl IntoResponse {
    let started = std::time::Instant::now();

    if let Err(err) = check_bounds(&state.config, &req) {
        tracing::warn!(error = %err, "rejected score request");
        return response::error(StatusCode::UNPROCESSABLE_ENTITY, err.to_string());
    }

    let result = scoring::score(&req.text, &req.keywords, req.response_time_ms);
    tracing::info!(
        sentiment = result.sentiment_score,
        performance = result.performance_score,
        relevant_keywords = result.keyword_relevance.len(),
        elapsed = ?started.elapsed(),
        "scored response"
    );

    response::success(ScoreResponse {
        sentiment_score: result.sentiment_score,
        keyword_relevance: result.keyword_relevance,
        performance_score: result.performance_score,
        text_length: req.text.chars().count(),
        scored_at: Utc::now(),
    })
}

/// Request bounds are service hygiene only; the scoring pipeline itself
/// accepts any input.
fn check_bounds(config: &Config, req: &ScoreRequest) -> Result<()> {
    let text_chars = req.text.chars().count();
    if text_chars > config.max_text_chars {
        return Err(AppError::InvalidInput(format!(
            "text is {} characters, limit is {}",
            text_chars, config.max_text_chars
        )));
    }

    if req.keywords.len() > config.max_keywords {
        return Err(AppError::InvalidInput(format!(
            "{} keywords supplied, limit is {}",
            req.keywords.len(),
            config.max_keywords
        )));
    }

    Ok(())
}
