use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use once_cell::sync::Lazy;
use crate::error::{AppError, Result};

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Pages larger than this are refused rather than buffered.
pub const MAX_PAGE_BYTES: usize = 5 * 1024 * 1024;

// Some sites reject requests that don't look like they came from a browser.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    ClientBuilder::new()
        .user_agent(BROWSER_USER_AGENT)
        .default_headers(headers)
        .timeout(FETCH_TIMEOUT)
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// GET the page and return its body. Non-2xx statuses, non-textual
/// content types and bodies over `MAX_PAGE_BYTES` are fetch failures.
pub async fn fetch_html(url: &str) -> Result<String> {
    fetch_html_limited(url, MAX_PAGE_BYTES).await
}

pub async fn fetch_html_limited(url: &str, max_bytes: usize) -> Result<String> {
    let mut response = CLIENT.get(url).send().await?.error_for_status()?;

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_ascii_lowercase);

    if let Some(ct) = content_type.as_deref() {
        if !is_textual(ct) {
            return Err(AppError::FetchError(format!("unsupported content type {}", ct)));
        }
    }

    if response.content_length().is_some_and(|len| len > max_bytes as u64) {
        return Err(too_large(max_bytes));
    }

    // Content-Length can be absent or wrong, so the cap is enforced while reading.
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > max_bytes {
            return Err(too_large(max_bytes));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}

fn too_large(max_bytes: usize) -> AppError {
    AppError::FetchError(format!("page is larger than {} bytes", max_bytes))
}

fn is_textual(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or("").trim();
    mime.starts_with("text/") || mime.contains("html") || mime.ends_with("+xml")
}
