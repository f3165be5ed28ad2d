use anyhow::Context;
use books_api::config::{self, DbConfig, LISTEN_PORT};
use books_api::transport;
use books_api::DatabaseService;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // --- Configuration ---
    config::load_env_file().context("could not load configuration")?;
    let db_config = DbConfig::from_env();
    tracing::info!(host = %db_config.host, port = %db_config.port, dbname = %db_config.dbname, "configuration loaded");

    // --- Database ---
    let db_service = DatabaseService::connect(&db_config)
        .await
        .context("couldn't connect to database")?;
    tracing::info!("connected to database");

    db_service
        .ensure_schema()
        .await
        .context("could not migrate the database")?;
    tracing::info!("books table ready");

    let app_state = transport::http::AppState::new(Arc::new(db_service.book_store()));

    // --- API Server ---
    let app = transport::http::create_router(app_state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", LISTEN_PORT))
        .await
        .with_context(|| format!("could not bind port {}", LISTEN_PORT))?;
    tracing::info!("API server listening on http://0.0.0.0:{}", LISTEN_PORT);

    axum::serve(listener, app).await?;
    Ok(())
}
