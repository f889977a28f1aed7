#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;

use page_summarizer::{api::routes::create_router, config::Config, AppState};
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-key";

/// Config pointing the inference client at `llm_base_url`.
pub fn test_config(llm_base_url: &str, api_key: Option<&str>) -> Config {
    let mut vars = HashMap::new();
    vars.insert("HOST".to_string(), "127.0.0.1".to_string());
    vars.insert("PORT".to_string(), "0".to_string());
    vars.insert("OPENAI_BASE_URL".to_string(), llm_base_url.to_string());
    vars.insert("OPENAI_TIMEOUT_SECS".to_string(), "5".to_string());
    if let Some(key) = api_key {
        vars.insert("OPENAI_API_KEY".to_string(), key.to_string());
    }
    Config::from_vars(|key| vars.get(key).cloned()).expect("test config should be valid")
}

/// Serve the real router on an ephemeral port and return its base URL.
pub async fn spawn_app(config: Config) -> String {
    let state = AppState::new(config).expect("app state should build");
    let app = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind ephemeral port");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });

    format!("http://{}", addr)
}

/// An address nothing is listening on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind ephemeral port");
    listener.local_addr().expect("listener has an address")
}

pub fn article_html(paragraphs: &[String]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>\n", p))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Library reopens after renovation</title></head>
<body>
  <nav><a href="/">Home</a> | <a href="/local">Local</a> | <a href="/sports">Sports</a></nav>
  <article>
    <h1>Library reopens after renovation</h1>
    {body}
  </article>
  <footer>All rights reserved.</footer>
</body>
</html>"#
    )
}

pub fn sample_paragraphs() -> Vec<String> {
    vec![
        "The central library reopened on Saturday after an eighteen month renovation \
         that added a new children's wing, a rooftop reading garden, and expanded \
         study rooms for students preparing for exams."
            .to_string(),
        "City officials said the project finished on budget, and the library will now \
         stay open until nine in the evening on weekdays to serve commuters who could \
         not visit during the old hours."
            .to_string(),
        "Hundreds of residents lined up before the doors opened, and librarians handed \
         out more than four hundred new library cards during the first afternoon."
            .to_string(),
    ]
}

pub async fn post_summarize(app: &str, url: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/summarize", app))
        .json(&serde_json::json!({ "url": url }))
        .send()
        .await
        .expect("summarize request should complete")
}

pub async fn summary_of(response: reqwest::Response) -> String {
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("response should be JSON");
    body["summary"]
        .as_str()
        .expect("response should carry a summary string")
        .to_string()
}
