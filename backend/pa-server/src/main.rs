use pa_db::DatabaseOptions;
use pa_server::{AppState, ServerError, build_router, logger};

use std::error::Error;

use axum::{ServiceExt, extract::Request};
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = pa_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting pa-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the database and apply migrations
    let options = DatabaseOptions {
        path: config.database_path()?,
        max_connections: config.database.max_connections,
        acquire_timeout: config.acquire_timeout(),
    };
    let pool = pa_db::connect(&options).await.map_err(ServerError::from)?;
    info!("Database ready");

    let app_state = AppState::new(pool.clone(), &config);
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::Bind {
            addr: bind_addr.clone(),
            source: e,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr().map_err(ServerError::from)?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::from)?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

/// Resolves on Ctrl+C. If the signal cannot be installed the server keeps
/// running until killed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
