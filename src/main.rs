// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::application::browse_service::BrowseService;
use crate::infrastructure::archive_repository::ArchiveRepository;
use crate::infrastructure::config::{load_archive_config, load_browse_config};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{browse, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let archive_config = load_archive_config()?;
    let browse_config = load_browse_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(ArchiveRepository::new(
        archive_config.archive.host,
        archive_config.archive.timeout_secs,
    )?);

    // Create service (application layer)
    let browse_service = BrowseService::new(
        repository,
        browse_config.default_from,
        browse_config.default_to,
    );

    // Create application state
    let state = Arc::new(AppState { browse_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(browse))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = browse_config.bind.parse()?;
    tracing::info!("Starting goes-flux-browser on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
