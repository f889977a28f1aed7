use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};

use crate::api::models::SummarizeResponse;

/// Every failure the pipeline can hit. The `Display` text of each variant is
/// what the caller hears in place of a summary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Could not fetch that page: {0}")]
    FetchError(String),

    #[error("No readable text found on that webpage.")]
    NoReadableText,

    #[error("Error during summarization: {0}")]
    LlmError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!(error = ?self, "summarize request degraded to error summary");

        // Clients only read `summary`, so failures keep the success shape.
        let body = Json(SummarizeResponse {
            summary: self.to_string(),
        });

        (StatusCode::OK, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
