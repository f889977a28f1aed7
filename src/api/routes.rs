use axum::{
    routing::{get, post},
    Router,
    extract::{Json, State},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use chrono::Utc;
use std::time::Instant;

use crate::error::Result;
use crate::api::models::{HealthResponse, SummarizeRequest, SummarizeResponse};
use crate::summarize::summarize_url;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/summarize", post(summarize_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        message: "Page summarizer running".to_string(),
        timestamp: Utc::now(),
    })
}

/// Always answers 200; failures come back as an explanatory `summary`.
async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>> {
    tracing::info!(url = %req.url, "processing summarize request");
    let start_time = Instant::now();

    let result = summarize_url(&state.llm, &req.url).await;
    tracing::info!(url = %req.url, elapsed = ?start_time.elapsed(), ok = result.is_ok(), "summarize request finished");

    let summary = result?;
    Ok(Json(SummarizeResponse { summary }))
}
