//! Price derivation from raw integer swap amounts.

/// Exponent of the fixed scaling factor used by the legacy scanner, which
/// assumed a 9-decimal input and a 6-decimal output for every pair.
pub const LEGACY_SCALE_EXPONENT: i32 = 9 - 6;

/// Number of fractional digits in every price string.
pub const PRICE_PRECISION: usize = 6;

/// How raw `outAmount / inAmount` ratios are turned into unit prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceScale {
    /// Scale by `10^(input decimals - output decimals)` of the actual tokens.
    #[default]
    TokenDecimals,
    /// Scale every pair by `10^3`, matching the old SOL/USDC-only assumption.
    Legacy,
}

impl PriceScale {
    pub fn exponent(self, input_decimals: u8, output_decimals: u8) -> i32 {
        match self {
            PriceScale::TokenDecimals => i32::from(input_decimals) - i32::from(output_decimals),
            PriceScale::Legacy => LEGACY_SCALE_EXPONENT,
        }
    }
}

/// `out / in`, or zero when nothing went in.
pub fn raw_ratio(in_amount: u64, out_amount: u64) -> f64 {
    if in_amount == 0 {
        return 0.0;
    }
    out_amount as f64 / in_amount as f64
}

pub fn format_price(value: f64) -> String {
    format!("{:.*}", PRICE_PRECISION, value)
}

/// Unit price of the input token expressed in the output token.
pub fn compute_price(in_amount: u64, out_amount: u64, exponent: i32) -> String {
    format_price(raw_ratio(in_amount, out_amount) * 10f64.powi(exponent))
}
