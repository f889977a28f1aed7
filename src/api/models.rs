use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
}

/// Success and failure share this shape.
#[derive(Serialize, Deserialize, Debug)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
