pub mod jupiter;
pub mod price;

pub use jupiter::JupiterClient;
pub use price::PriceScale;

use crate::error::QuoteError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Placeholder route label when the upstream names no venue.
pub const UNKNOWN_ROUTE: &str = "N/A";

/// One price as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub pair: String,  // "SOL/USDC"
    pub price: String, // fixed-point, 6 fractional digits
    pub route: String, // venue label or "N/A"
}

/// Parameters of a single exact-in quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub input_mint: String,
    pub output_mint: String,
    pub amount: u64,
    pub slippage_bps: u16,
}

/// The parts of an upstream quote the scanner cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamQuote {
    pub in_amount: u64,
    pub out_amount: u64,
    pub route: Option<String>,
}

#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn quote(&self, request: &QuoteRequest) -> Result<UpstreamQuote, QuoteError>;
}
