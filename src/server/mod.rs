//! HTTP surface of the scanner.

pub mod handlers;
pub mod types;

pub use handlers::AppState;

use crate::config::ScannerConfig;
use crate::quote::JupiterClient;
use crate::scanner::PriceScanner;
use crate::tokens::TokenRegistry;
use anyhow::{Context, Result};
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the router with all routes, tracing and CORS.
pub fn create_router(state: AppState) -> Router {
    // The mobile client calls from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/dex-prices", get(handlers::dex_prices))
        .route("/dex-prices/report", get(handlers::dex_prices_report))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Wire up the builtin registry and the Jupiter client, then serve until Ctrl-C.
pub async fn run_server(config: ScannerConfig) -> Result<()> {
    let registry = Arc::new(TokenRegistry::builtin());
    for unresolved in registry.validate() {
        warn!(
            pair = %unresolved.pair,
            missing = ?unresolved.missing,
            "pair cannot be resolved and will never be quoted"
        );
    }

    let client = JupiterClient::new(config.quote_api_url.clone(), config.timeout)
        .context("failed to build quote API client")?;
    let scanner = PriceScanner::new(
        registry,
        Arc::new(client),
        config.slippage_bps,
        config.scale,
    );
    let app = create_router(AppState::new(scanner));

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    info!("Listening on http://{}", config.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
