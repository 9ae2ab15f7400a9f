use std::time::Duration;

use crate::error::QuoteError;
use crate::quote::{QuoteRequest, QuoteSource, UpstreamQuote};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_QUOTE_API_URL: &str = "https://quote-api.jup.ag/v6/quote";

/// Jupiter aggregator quote client.
/// Issues one `GET /quote` per request; no retries.
#[derive(Debug, Clone)]
pub struct JupiterClient {
    client: Client,
    base: Url,
}

impl JupiterClient {
    /// `timeout` of `None` leaves reqwest's default (no overall timeout).
    pub fn new(base: Url, timeout: Option<Duration>) -> Result<Self, QuoteError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn quote_url(&self, request: &QuoteRequest) -> Url {
        let mut url = self.base.clone();
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("inputMint", &request.input_mint);
            qp.append_pair("outputMint", &request.output_mint);
            qp.append_pair("amount", &request.amount.to_string());
            qp.append_pair("slippageBps", &request.slippage_bps.to_string());
        }
        url
    }
}

#[async_trait]
impl QuoteSource for JupiterClient {
    async fn quote(&self, request: &QuoteRequest) -> Result<UpstreamQuote, QuoteError> {
        let url = self.quote_url(request);
        debug!(%url, "requesting quote");

        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(QuoteError::UpstreamStatus(status));
        }

        let body = resp.bytes().await?;
        parse_quote_body(&body)
    }
}

// Jupiter encodes u64 amounts as strings; plain numbers are accepted as well.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(u64),
}

#[derive(Deserialize)]
struct RouteInfo {
    label: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoutePlanStep {
    swap_info: Option<RouteInfo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteBody {
    in_amount: Option<RawAmount>,
    out_amount: Option<RawAmount>,
    // v4 shape
    market_infos: Option<Vec<RouteInfo>>,
    // v6 shape
    route_plan: Option<Vec<RoutePlanStep>>,
}

fn amount_field(raw: Option<RawAmount>, field: &str) -> Result<u64, QuoteError> {
    match raw {
        None => Err(QuoteError::MalformedResponse(format!("missing {field}"))),
        Some(RawAmount::Number(n)) => Ok(n),
        Some(RawAmount::Text(s)) => s.trim().parse().map_err(|_| {
            QuoteError::MalformedResponse(format!("{field} is not an integer: {s:?}"))
        }),
    }
}

/// Parse a quote response body.
///
/// The route label comes from the first `marketInfos` entry, falling back to
/// the first `routePlan[].swapInfo`; it is `None` when neither names a venue.
pub fn parse_quote_body(body: &[u8]) -> Result<UpstreamQuote, QuoteError> {
    let parsed: QuoteBody = serde_json::from_slice(body)?;

    let in_amount = amount_field(parsed.in_amount, "inAmount")?;
    let out_amount = amount_field(parsed.out_amount, "outAmount")?;

    let market_label = parsed
        .market_infos
        .and_then(|infos| infos.into_iter().next())
        .and_then(|info| info.label);
    let route = market_label.or_else(|| {
        parsed
            .route_plan
            .and_then(|steps| steps.into_iter().next())
            .and_then(|step| step.swap_info)
            .and_then(|info| info.label)
    });

    Ok(UpstreamQuote {
        in_amount,
        out_amount,
        route,
    })
}
