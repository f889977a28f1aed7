use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "page_summarizer=info,tower_http=info";

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global tracing subscriber. Safe to call more than once.
///
/// `RUST_LOG` overrides the default filter; `LOG_FORMAT=json` emits JSON lines.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let json = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let builder = fmt().with_env_filter(filter).with_target(true);
        let result = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };

        // Someone else (usually a test harness) already installed one.
        if result.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
