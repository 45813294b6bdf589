mod config;
mod db;
mod errors;
mod ingest;
mod models;
mod prompt;
mod routes;
mod search;
mod service;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::service::QueryService;
use crate::state::AppState;
use crate::store::JobStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobscout API v{}", env!("CARGO_PKG_VERSION"));

    // Open the record store
    let pool = create_pool(&config.database_path).await?;
    let store = JobStore::new(pool);

    // Optional bootstrap: seed deterministic mock postings before serving
    if let Some(n) = config.seed_mock_jobs {
        let report = ingest::ingest_mock(&store, n).await?;
        info!(
            "Mock seed complete: {} ingested, {} skipped",
            report.ingested, report.skipped
        );
    }

    let state = AppState {
        service: QueryService::new(store),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
