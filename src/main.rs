use lexbee_server::{
    Config,
    api::{AppState, create_router},
};
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is applied inside Config::load, before anything reads the environment
    let config = Config::load()?;

    // RUST_LOG wins over LOG_LEVEL when both are set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .init();

    tracing::info!("🚀 Starting LexBee lookup server v{}", env!("CARGO_PKG_VERSION"));

    // Missing keys are not fatal; the upstream rejects each request instead
    for warning in config.warnings() {
        tracing::warn!("⚠️ {}", warning);
    }
    tracing::info!(
        "📚 Dictionary API: {} | 🤖 Completion model: {} at {}",
        config.dictionary.base_url,
        config.completion.model,
        config.completion.base_url
    );

    let state = AppState::from_config(&config)?;
    let app = create_router(state, &config);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🌐 Server listening on http://{}", listener.local_addr()?);
    tracing::info!("📡 Available endpoints:");
    tracing::info!("  • GET /                     - Health check");
    tracing::info!("  • GET /front/{{word}}         - Dictionary definitions passthrough");
    tracing::info!("  • GET /definition/{{word}}    - Model definition (?context=)");
    tracing::info!("  • GET /frequency/{{word}}     - Usage frequency by year");
    tracing::info!("  • GET /pronunciation/{{word}} - Audio pronunciation URL");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("❌ Server error: {}", e);
            e
        })?;

    tracing::info!("👋 Server shutdown complete");
    Ok(())
}

// Ctrl+C everywhere, SIGTERM on unix (container stop)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received");
}
