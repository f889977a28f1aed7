use std::time::Instant;
use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::extract::readable_text;
use crate::fetch::fetch_html;
use crate::llm::LlmClient;
use crate::prompt::{MAX_ARTICLE_CHARS, build_prompt};

/// Fetch `url`, pull out its readable text and ask the model for a spoken
/// summary. Each step short-circuits with the matching `AppError`.
pub async fn summarize_url(llm: &LlmClient, url: &str) -> Result<String> {
    let fetch_start = Instant::now();
    let html = fetch_html(url).await.map_err(|e| {
        warn!(url, error = %e, "page fetch failed");
        e
    })?;
    info!(url, bytes = html.len(), elapsed = ?fetch_start.elapsed(), "fetched page");

    // DOM parsing is CPU-bound; keep it off the async workers.
    let page_url = url.to_string();
    let text = tokio::task::spawn_blocking(move || readable_text(&html, Some(&page_url)))
        .await
        .unwrap_or_else(|e| {
            warn!(url, error = %e, "extraction task failed");
            None
        })
        .ok_or(AppError::NoReadableText)?;
    let chars = text.chars().count();
    info!(url, chars, "extracted text");
    if chars > MAX_ARTICLE_CHARS {
        info!(url, chars, limit = MAX_ARTICLE_CHARS, "truncating text");
    }

    let prompt = build_prompt(&text);

    let llm_start = Instant::now();
    let summary = llm.complete(&prompt).await?;
    info!(
        url,
        model = llm.model(),
        summary_chars = summary.chars().count(),
        elapsed = ?llm_start.elapsed(),
        "summary generated"
    );

    Ok(summary)
}
