//! DEX price scanner backend.
//!
//! Quotes a fixed list of Solana token pairs against the Jupiter aggregator
//! and serves the results as one JSON array:
//!
//! ```text
//! GET /                   liveness text
//! GET /dex-prices         [{"pair":"SOL/USDC","price":"150.000000","route":"Orca"}, ...]
//! GET /dex-prices/report  per-pair status, including why a pair is missing
//! ```

mod app;
mod args;
pub mod config;
pub mod error;
pub mod quote;
pub mod scanner;
pub mod server;
pub mod tokens;
pub mod utils;

pub use app::Application;
pub use args::Cli;
pub use config::ScannerConfig;
pub use error::QuoteError;
pub use quote::{JupiterClient, PriceScale, QuoteRequest, QuoteResult, QuoteSource, UpstreamQuote};
pub use scanner::{PairQuote, PriceScanner};
pub use server::{create_router, run_server, AppState};
pub use tokens::{TokenRegistry, TradingPair};
