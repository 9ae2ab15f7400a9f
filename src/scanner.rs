//! Sequential price scan over the configured pairs.

use std::sync::Arc;

use crate::error::QuoteError;
use crate::quote::price::{compute_price, PriceScale};
use crate::quote::{QuoteRequest, QuoteResult, QuoteSource, UNKNOWN_ROUTE};
use crate::tokens::{ResolvedPair, TokenRegistry, TradingPair};
use tracing::{debug, info, warn};

pub const DEFAULT_SLIPPAGE_BPS: u16 = 50;

/// Outcome of quoting one pair.
#[derive(Debug)]
pub struct PairQuote {
    pub pair: TradingPair,
    pub outcome: Result<QuoteResult, QuoteError>,
}

impl PairQuote {
    pub fn ok(self) -> Option<QuoteResult> {
        self.outcome.ok()
    }
}

pub struct PriceScanner {
    registry: Arc<TokenRegistry>,
    source: Arc<dyn QuoteSource>,
    slippage_bps: u16,
    scale: PriceScale,
}

impl PriceScanner {
    pub fn new(
        registry: Arc<TokenRegistry>,
        source: Arc<dyn QuoteSource>,
        slippage_bps: u16,
        scale: PriceScale,
    ) -> Self {
        Self {
            registry,
            source,
            slippage_bps,
            scale,
        }
    }

    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    fn resolve(&self, pair: &TradingPair) -> Result<ResolvedPair<'_>, QuoteError> {
        let input = self
            .registry
            .token(&pair.input)
            .ok_or_else(|| QuoteError::UnknownSymbol(pair.input.clone()))?;
        let output = self
            .registry
            .token(&pair.output)
            .ok_or_else(|| QuoteError::UnknownSymbol(pair.output.clone()))?;
        let amount = self
            .registry
            .input_amount(&pair.input)
            .ok_or_else(|| QuoteError::MissingInputAmount(pair.input.clone()))?;
        Ok(ResolvedPair {
            input,
            output,
            amount,
        })
    }

    /// Quote a single pair. Unresolvable pairs fail before any network call.
    pub async fn fetch_pair(&self, pair: &TradingPair) -> Result<QuoteResult, QuoteError> {
        let resolved = self.resolve(pair)?;
        let request = QuoteRequest {
            input_mint: resolved.input.mint.clone(),
            output_mint: resolved.output.mint.clone(),
            amount: resolved.amount,
            slippage_bps: self.slippage_bps,
        };

        let quote = self.source.quote(&request).await?;

        let exponent = self
            .scale
            .exponent(resolved.input.decimals, resolved.output.decimals);
        Ok(QuoteResult {
            pair: pair.label(),
            price: compute_price(quote.in_amount, quote.out_amount, exponent),
            route: quote.route.unwrap_or_else(|| UNKNOWN_ROUTE.to_string()),
        })
    }

    /// Quote `input`/`output`, logging and swallowing any failure.
    pub async fn fetch_price(&self, input: &str, output: &str) -> Option<QuoteResult> {
        self.quote_pair(&TradingPair::new(input, output)).await.ok()
    }

    async fn quote_pair(&self, pair: &TradingPair) -> PairQuote {
        let outcome = self.fetch_pair(pair).await;
        match &outcome {
            Ok(quote) => {
                debug!(pair = %pair, price = %quote.price, route = %quote.route, "quoted")
            }
            Err(err) if err.is_resolution_miss() => debug!(pair = %pair, "skipped: {err}"),
            Err(err) => warn!(pair = %pair, kind = err.kind(), "error processing pair: {err}"),
        }
        PairQuote {
            pair: pair.clone(),
            outcome,
        }
    }

    /// Quote every configured pair, one after another, in declaration order.
    pub async fn scan(&self) -> Vec<PairQuote> {
        let mut out = Vec::with_capacity(self.registry.pairs().len());
        for pair in self.registry.pairs() {
            out.push(self.quote_pair(pair).await);
        }
        out
    }

    /// Successful quotes only, order preserved.
    pub async fn prices(&self) -> Vec<QuoteResult> {
        let prices: Vec<QuoteResult> = self
            .scan()
            .await
            .into_iter()
            .filter_map(PairQuote::ok)
            .collect();
        info!(
            "collected {} of {} DEX prices",
            prices.len(),
            self.registry.pairs().len()
        );
        prices
    }
}
