//! Tests for the HTTP endpoints, backed by an in-memory quote source.

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use dex_scanner::server::types::PairReport;
use dex_scanner::tokens::{BONK_MINT, JUP_MINT, SOL_MINT, WIF_MINT};
use dex_scanner::{
    create_router, AppState, PriceScale, PriceScanner, QuoteError, QuoteRequest, QuoteResult,
    QuoteSource, TokenRegistry, UpstreamQuote,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

#[derive(Clone, Copy)]
enum Canned {
    Quote(u64, u64, Option<&'static str>),
    Status(u16),
    Malformed,
}

/// Answers by input mint; unknown mints get a 503.
#[derive(Default)]
struct FakeJupiter {
    by_input_mint: HashMap<&'static str, Canned>,
    calls: AtomicUsize,
}

impl FakeJupiter {
    fn with(mut self, mint: &'static str, canned: Canned) -> Self {
        self.by_input_mint.insert(mint, canned);
        self
    }
}

#[async_trait]
impl QuoteSource for FakeJupiter {
    async fn quote(&self, request: &QuoteRequest) -> Result<UpstreamQuote, QuoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.by_input_mint.get(request.input_mint.as_str()) {
            Some(Canned::Quote(in_amount, out_amount, route)) => Ok(UpstreamQuote {
                in_amount: *in_amount,
                out_amount: *out_amount,
                route: route.map(str::to_string),
            }),
            Some(Canned::Status(code)) => Err(QuoteError::UpstreamStatus(
                StatusCode::from_u16(*code).unwrap(),
            )),
            Some(Canned::Malformed) => {
                Err(QuoteError::MalformedResponse("missing outAmount".into()))
            }
            None => Err(QuoteError::UpstreamStatus(StatusCode::SERVICE_UNAVAILABLE)),
        }
    }
}

fn create_test_router(source: Arc<FakeJupiter>, registry: TokenRegistry) -> Router {
    let scanner = PriceScanner::new(Arc::new(registry), source, 50, PriceScale::TokenDecimals);
    create_router(AppState::new(scanner))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}

#[tokio::test]
async fn test_index_reports_liveness() {
    let app = create_test_router(Arc::new(FakeJupiter::default()), TokenRegistry::builtin());

    let (status, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"DEX Scanner Backend is running.");
}

#[tokio::test]
async fn test_dex_prices_reference_pair() {
    let source = Arc::new(
        FakeJupiter::default().with(SOL_MINT, Canned::Quote(1_000_000_000, 150_000_000, Some("Orca"))),
    );
    let app = create_test_router(source, TokenRegistry::builtin());

    let (status, body) = get(app, "/dex-prices").await;
    assert_eq!(status, StatusCode::OK);

    let prices: Vec<QuoteResult> = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        prices,
        vec![QuoteResult {
            pair: "SOL/USDC".into(),
            price: "150.000000".into(),
            route: "Orca".into(),
        }]
    );
}

#[tokio::test]
async fn test_dex_prices_json_shape() {
    let source = Arc::new(
        FakeJupiter::default().with(SOL_MINT, Canned::Quote(1_000_000_000, 150_000_000, None)),
    );
    let app = create_test_router(source, TokenRegistry::builtin());

    let (_, body) = get(app, "/dex-prices").await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "pair": "SOL/USDC", "price": "150.000000", "route": "N/A" }])
    );
}

#[tokio::test]
async fn test_dex_prices_partial_failure_keeps_order() {
    let source = Arc::new(
        FakeJupiter::default()
            .with(SOL_MINT, Canned::Quote(1_000_000_000, 150_000_000, Some("Orca")))
            .with(JUP_MINT, Canned::Status(500))
            .with(WIF_MINT, Canned::Malformed)
            .with(BONK_MINT, Canned::Quote(100_000_000_000, 2_000_000_000, Some("Raydium"))),
    );
    let app = create_test_router(source.clone(), TokenRegistry::builtin());

    let (status, body) = get(app, "/dex-prices").await;
    assert_eq!(status, StatusCode::OK);

    let prices: Vec<QuoteResult> = serde_json::from_slice(&body).unwrap();
    let pairs: Vec<&str> = prices.iter().map(|p| p.pair.as_str()).collect();
    assert_eq!(pairs, vec!["SOL/USDC", "BONK/SOL"]);
    // 1M BONK (5 decimals) for 2 SOL (9 decimals)
    assert_eq!(prices[1].price, "0.000002");
    assert_eq!(prices[1].route, "Raydium");
    assert_eq!(source.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_dex_prices_all_failed_is_empty_ok() {
    let source = Arc::new(FakeJupiter::default());
    let app = create_test_router(source, TokenRegistry::builtin());

    let (status, body) = get(app, "/dex-prices").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"[]");
}

#[tokio::test]
async fn test_unresolvable_pair_is_skipped_without_upstream_call() {
    let registry = TokenRegistry::new()
        .with_token("SOL", SOL_MINT, 9)
        .with_pair("SOL", "USDC")
        .with_pair("DOGE", "SOL");
    let source = Arc::new(FakeJupiter::default().with(SOL_MINT, Canned::Quote(1, 1, None)));
    let app = create_test_router(source.clone(), registry);

    let (status, body) = get(app, "/dex-prices").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"[]");
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_report_distinguishes_failure_kinds() {
    let registry = TokenRegistry::builtin().with_pair("DOGE", "USDC");
    let source = Arc::new(
        FakeJupiter::default()
            .with(SOL_MINT, Canned::Quote(1_000_000_000, 150_000_000, Some("Orca")))
            .with(JUP_MINT, Canned::Status(429))
            .with(WIF_MINT, Canned::Malformed),
    );
    let app = create_test_router(source, registry);

    let (status, body) = get(app, "/dex-prices/report").await;
    assert_eq!(status, StatusCode::OK);

    let report: Vec<PairReport> = serde_json::from_slice(&body).unwrap();
    let statuses: Vec<(&str, &str)> = report
        .iter()
        .map(|r| (r.pair.as_str(), r.status.as_str()))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("SOL/USDC", "ok"),
            ("JUP/USDC", "upstream_status"),
            ("WIF/SOL", "malformed_response"),
            ("BONK/SOL", "upstream_status"),
            ("DOGE/USDC", "unknown_symbol"),
        ]
    );
    assert_eq!(report[0].price.as_deref(), Some("150.000000"));
    assert!(report[0].error.is_none());
    assert_eq!(report[4].error.as_deref(), Some("unknown symbol: DOGE"));
    assert!(report[1].error.as_deref().unwrap().contains("429"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_router(Arc::new(FakeJupiter::default()), TokenRegistry::builtin());

    let (status, _) = get(app, "/prices").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
