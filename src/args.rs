use clap::{Parser, ValueHint};
use std::net::SocketAddr;

use crate::quote::jupiter::DEFAULT_QUOTE_API_URL;
use crate::scanner::DEFAULT_SLIPPAGE_BPS;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

#[derive(Parser, Debug, Clone)]
#[command(name = "dex-scanner", author, version)]
#[command(about = "Serves Jupiter DEX prices for a fixed set of Solana token pairs")]
pub struct Cli {
    /// Address to listen on
    #[arg(short, long, env = "DEX_SCANNER_LISTEN", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: SocketAddr,

    /// Jupiter quote endpoint
    #[arg(
        long,
        env = "JUPITER_QUOTE_API",
        default_value = DEFAULT_QUOTE_API_URL,
        value_hint = ValueHint::Url
    )]
    pub quote_api_url: String,

    /// Slippage tolerance sent with every quote, in basis points
    #[arg(long, env = "DEX_SCANNER_SLIPPAGE_BPS", default_value_t = DEFAULT_SLIPPAGE_BPS)]
    pub slippage_bps: u16,

    /// Per-request timeout for quote calls in seconds (unset = no timeout)
    #[arg(long, env = "DEX_SCANNER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Scale every price by 10^3 instead of using token decimals
    #[arg(long, env = "DEX_SCANNER_LEGACY_SCALE")]
    pub legacy_scale: bool,
}
