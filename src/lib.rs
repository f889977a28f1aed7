pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod llm;
pub mod logging;
pub mod prompt;
pub mod summarize;

use std::sync::Arc;
use config::Config;
use llm::LlmClient;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<LlmClient>,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let llm = LlmClient::from_config(&config)?;
        Ok(Self {
            config: Arc::new(config),
            llm: Arc::new(llm),
        })
    }
}
