//! Per-pair failure reasons.
//!
//! A failed pair never fails the whole scan; the reason is kept so the
//! diagnostic report can tell a configuration miss from an upstream problem.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    /// Symbol has no (non-empty) mint address in the registry.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// Input symbol has no positive quote amount configured.
    #[error("no input amount configured for {0}")]
    MissingInputAmount(String),

    /// Connection, TLS, timeout or body read failure.
    #[error("quote request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("quote API returned status {0}")]
    UpstreamStatus(StatusCode),

    /// Body was not JSON or lacked a usable `inAmount` / `outAmount`.
    #[error("malformed quote response: {0}")]
    MalformedResponse(String),
}

impl QuoteError {
    /// Stable machine-readable tag used in the report endpoint.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownSymbol(_) => "unknown_symbol",
            Self::MissingInputAmount(_) => "missing_input_amount",
            Self::Transport(_) => "transport",
            Self::UpstreamStatus(_) => "upstream_status",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }

    /// Configuration misses are skipped silently; everything else is logged.
    pub fn is_resolution_miss(&self) -> bool {
        matches!(self, Self::UnknownSymbol(_) | Self::MissingInputAmount(_))
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::MalformedResponse(err.to_string())
    }
}
