use serde::Serialize;
use reqwest::Client;
use crate::config::Config;
use crate::error::{Result, AppError};

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

/// Chat-completions client, built once at startup and shared by all requests.
pub struct LlmClient {
    http: Client,
    api_key: Option<String>,
    endpoint: String,
    model: String,
    temperature: f32,
}

impl LlmClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.llm_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build inference client: {}", e)))?;

        Ok(Self {
            http,
            api_key: config.openai_api_key.clone(),
            endpoint: format!("{}/chat/completions", config.openai_base_url),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` as a single user message and return the trimmed reply.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::LlmError("OPENAI_API_KEY is not set".to_string()))?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let res = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LlmError(e.to_string()))?;

        let status = res.status();
        let json: serde_json::Value = res.json().await.map_err(|e| {
            AppError::LlmError(format!("Invalid response from inference API ({}): {}", status, e))
        })?;

        if !status.is_success() {
            let detail = json["error"]["message"]
                .as_str()
                .unwrap_or("no error message returned");
            return Err(AppError::LlmError(format!("{}: {}", status, detail)));
        }

        let reply = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| AppError::LlmError("Invalid response format from LLM".to_string()))?
            .trim();

        if reply.is_empty() {
            return Err(AppError::LlmError("The model returned an empty summary".to_string()));
        }

        Ok(reply.to_string())
    }
}
