use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f32,
    /// `None` leaves the inference call on the HTTP client's default.
    pub llm_timeout: Option<Duration>,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_vars<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("PORT").unwrap_or_else(|| "10000".to_string());
        let port = port.trim().parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(host.trim()).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let openai_api_key = var("OPENAI_API_KEY");
        let openai_base_url = var("OPENAI_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = match var("OPENAI_TEMPERATURE") {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .map_err(|e| AppError::ConfigError(format!("Invalid temperature: {}", e)))?,
            None => DEFAULT_TEMPERATURE,
        };
        if !(0.0..=2.0).contains(&temperature) {
            return Err(AppError::ConfigError(format!(
                "Temperature must be between 0 and 2, got {}",
                temperature
            )));
        }

        let llm_timeout = var("OPENAI_TIMEOUT_SECS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|e| AppError::ConfigError(format!("Invalid timeout: {}", e)))
            })
            .transpose()?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            openai_api_key,
            openai_base_url,
            model,
            temperature,
            llm_timeout,
        })
    }
}
