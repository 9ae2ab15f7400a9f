//! Response types of the diagnostic report endpoint.

use crate::scanner::PairQuote;
use serde::{Deserialize, Serialize};

/// Per-pair line of `GET /dex-prices/report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairReport {
    pub pair: String,
    /// `ok` or the failure kind, e.g. `upstream_status`.
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<PairQuote> for PairReport {
    fn from(quote: PairQuote) -> Self {
        let pair = quote.pair.label();
        match quote.outcome {
            Ok(result) => PairReport {
                pair,
                status: "ok".into(),
                price: Some(result.price),
                route: Some(result.route),
                error: None,
            },
            Err(err) => PairReport {
                pair,
                status: err.kind().into(),
                price: None,
                route: None,
                error: Some(err.to_string()),
            },
        }
    }
}
