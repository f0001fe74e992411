use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pressdeck_core::{
    build_source, load_config, validate_config, CatalogStore, CuratedLoader,
};

use pressdeck_server::api::create_router;
use pressdeck_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("PRESSDECK_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;
    info!("Configuration loaded successfully");

    // Load the catalog once at startup. A load failure is surfaced as a
    // persistent notice, not a crash: the portal stays usable with an
    // empty record set.
    let catalog_source = build_source(
        config.catalog.source,
        config.catalog.file.as_ref(),
        config.catalog.http.as_ref(),
    )
    .context("Failed to build catalog source")?;

    let (catalog, catalog_error) = match CatalogStore::load(catalog_source.as_ref()).await {
        Ok(store) => (store, None),
        Err(e) => {
            warn!("Catalog unavailable, serving empty portal: {}", e);
            (CatalogStore::empty(), Some(e.to_string()))
        }
    };

    // The curated list is fetched lazily, on the first curated-mode request.
    let curated = match &config.curated {
        Some(curated_config) => {
            let source = build_source(
                curated_config.source,
                curated_config.file.as_ref(),
                curated_config.http.as_ref(),
            )
            .context("Failed to build curated list source")?;
            info!("Curated list configured from {}", source.describe());
            Some(CuratedLoader::new(source))
        }
        None => {
            info!("No curated list configured");
            None
        }
    };

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), catalog, catalog_error, curated));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
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
}
