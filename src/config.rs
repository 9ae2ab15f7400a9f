use crate::args::Cli;
use crate::quote::jupiter::DEFAULT_QUOTE_API_URL;
use crate::quote::PriceScale;
use crate::scanner::DEFAULT_SLIPPAGE_BPS;
use anyhow::{ensure, Context, Result};
use reqwest::Url;
use std::net::SocketAddr;
use std::time::Duration;

/// 100% expressed in basis points.
pub const MAX_SLIPPAGE_BPS: u16 = 10_000;

/// Validated runtime settings of the scanner server.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub listen_addr: SocketAddr,
    pub quote_api_url: Url,
    pub slippage_bps: u16,
    pub timeout: Option<Duration>,
    pub scale: PriceScale,
}

impl ScannerConfig {
    pub fn setup(cli: Cli) -> Result<Self> {
        let quote_api_url = Url::parse(&cli.quote_api_url)
            .with_context(|| format!("invalid quote API url: {}", cli.quote_api_url))?;
        ensure!(
            matches!(quote_api_url.scheme(), "http" | "https"),
            "quote API url must be http(s), got {}",
            quote_api_url
        );
        ensure!(
            cli.slippage_bps <= MAX_SLIPPAGE_BPS,
            "slippage too high: {}bps, max is {}bps",
            cli.slippage_bps,
            MAX_SLIPPAGE_BPS
        );

        let timeout = match cli.timeout_secs {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let scale = if cli.legacy_scale {
            PriceScale::Legacy
        } else {
            PriceScale::TokenDecimals
        };

        Ok(Self {
            listen_addr: cli.listen,
            quote_api_url,
            slippage_bps: cli.slippage_bps,
            timeout,
            scale,
        })
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            quote_api_url: Url::parse(DEFAULT_QUOTE_API_URL).expect("valid url"),
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
            timeout: None,
            scale: PriceScale::default(),
        }
    }
}
