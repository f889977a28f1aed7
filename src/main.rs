use tokio::net::TcpListener;
use page_summarizer::{
    config::Config,
    api::routes::create_router,
    logging::init_logging,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration
    let config = Config::load()?;
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; summarize requests will return an error summary");
    }

    let app_state = AppState::new(config)?;
    let server_addr = app_state.config.server_addr;
    tracing::info!(
        addr = %server_addr,
        model = app_state.llm.model(),
        "starting server"
    );

    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!(addr = %server_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
