use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use image_server::{api, catalogue::Catalogue, config::Config, storage::Database, AppState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    match log_format.to_lowercase().as_str() {
        "gcp" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_stackdriver::layer())
                .init();
        }
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_span_list(false),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    info!(version = env!("CARGO_PKG_VERSION"), "image-server starting");

    // Load configuration
    let config = Config::load()?;

    // Open the document store
    let db = Database::open(&config.data_dir)?;
    info!("Document store opened at: {}", config.data_dir);

    // Build the catalogue before binding the listener: either the server
    // starts with a complete snapshot or it does not start at all.
    let load_timeout = Duration::from_secs(config.load_timeout_secs);
    let precompress = config.precompress;
    let load = tokio::task::spawn_blocking({
        let db = db.clone();
        move || Catalogue::load(&db, precompress)
    });
    let catalogue = tokio::time::timeout(load_timeout, load)
        .await
        .with_context(|| {
            format!(
                "Catalogue load exceeded the {}s startup timeout",
                config.load_timeout_secs
            )
        })?
        .context("Catalogue load task panicked")??;

    // Create shared state
    let state = Arc::new(AppState { config, catalogue });

    // Build and start the HTTP server
    let app = api::create_router(Arc::clone(&state));
    let listener = tokio::net::TcpListener::bind(&state.config.bind_address).await?;
    info!("Listening on: {}", state.config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
