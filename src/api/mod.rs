// src/api/mod.rs
pub mod error;
pub mod handlers;

use crate::config::Settings;
use crate::utils::AppError;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builds the read-only API router.
pub fn router(settings: Arc<Settings>) -> Router {
    Router::new()
        .route("/covid-overall-stats", get(handlers::overall_stats))
        .route("/covid-contact-info", get(handlers::contact_info))
        .route("/covid-vaccination-info", get(handlers::vaccination_info))
        .route("/covid-region-stats", get(handlers::region_stats))
        .route("/health", get(handlers::health))
        .with_state(settings)
}

/// Binds `addr` and serves the API until the process is stopped.
pub async fn serve(settings: Settings, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        "Serving on http://{} (upstream: {}, layout: {:?})",
        listener.local_addr()?,
        settings.upstream_url,
        settings.extractor.layout()
    );

    axum::serve(listener, router(Arc::new(settings))).await?;
    Ok(())
}
