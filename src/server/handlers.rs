//! HTTP request handlers.

use crate::quote::QuoteResult;
use crate::scanner::PriceScanner;
use crate::server::types::PairReport;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::info;

pub const LIVENESS_MESSAGE: &str = "DEX Scanner Backend is running.";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub scanner: Arc<PriceScanner>,
}

impl AppState {
    pub fn new(scanner: PriceScanner) -> Self {
        Self {
            scanner: Arc::new(scanner),
        }
    }
}

/// GET / - Liveness check.
pub async fn index() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /dex-prices - Prices of every pair that quoted successfully.
///
/// Always 200; failed pairs are simply absent.
pub async fn dex_prices(State(state): State<AppState>) -> Json<Vec<QuoteResult>> {
    info!("received price request from client");
    let prices = state.scanner.prices().await;
    info!("sending {} DEX prices to client", prices.len());
    Json(prices)
}

/// GET /dex-prices/report - One entry per configured pair, with failure reasons.
pub async fn dex_prices_report(State(state): State<AppState>) -> Json<Vec<PairReport>> {
    let report: Vec<PairReport> = state
        .scanner
        .scan()
        .await
        .into_iter()
        .map(PairReport::from)
        .collect();
    info!(
        ok = report.iter().filter(|r| r.status == "ok").count(),
        total = report.len(),
        "sending price report"
    );
    Json(report)
}
