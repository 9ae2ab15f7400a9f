//! Static token and pair configuration.
//!
//! The registry is built once at startup and never mutated afterwards; it is
//! shared between requests behind an `Arc`.

use std::collections::HashMap;
use std::fmt;

/// Wrapped SOL mint.
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const JUP_MINT: &str = "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN";
pub const WIF_MINT: &str = "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzL7GMYmCw54gK";
pub const BONK_MINT: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";

/// (symbol, mint, decimals)
const BUILTIN_TOKENS: &[(&str, &str, u8)] = &[
    ("SOL", SOL_MINT, 9),
    ("USDC", USDC_MINT, 6),
    ("JUP", JUP_MINT, 6),
    ("WIF", WIF_MINT, 6),
    ("BONK", BONK_MINT, 5),
];

/// Raw amount quoted per input symbol. BONK is quoted in a larger lot so the
/// output side does not round to zero.
const BUILTIN_INPUT_AMOUNTS: &[(&str, u64)] = &[
    ("SOL", 1_000_000_000),
    ("JUP", 1_000_000),
    ("WIF", 1_000_000),
    ("BONK", 100_000_000_000),
];

const BUILTIN_PAIRS: &[(&str, &str)] = &[
    ("SOL", "USDC"),
    ("JUP", "USDC"),
    ("WIF", "SOL"),
    ("BONK", "SOL"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub mint: String,
    pub decimals: u8,
}

/// Ordered (input, output) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradingPair {
    pub input: String,
    pub output: String,
}

impl TradingPair {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Label as exposed to clients, e.g. `SOL/USDC`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.input, self.output)
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.input, self.output)
    }
}

/// A pair whose symbols do not fully resolve against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPair {
    pub pair: TradingPair,
    pub missing: Vec<String>,
}

/// Everything needed to build an upstream quote request for one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPair<'a> {
    pub input: &'a TokenInfo,
    pub output: &'a TokenInfo,
    pub amount: u64,
}

/// Symbol tables plus the list of pairs to scan.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: HashMap<String, TokenInfo>,
    input_amounts: HashMap<String, u64>,
    pairs: Vec<TradingPair>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in Solana token set.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (symbol, mint, decimals) in BUILTIN_TOKENS {
            registry = registry.with_token(*symbol, *mint, *decimals);
        }
        for (symbol, amount) in BUILTIN_INPUT_AMOUNTS {
            registry = registry.with_input_amount(*symbol, *amount);
        }
        for (input, output) in BUILTIN_PAIRS {
            registry = registry.with_pair(*input, *output);
        }
        registry
    }

    pub fn with_token(
        mut self,
        symbol: impl Into<String>,
        mint: impl Into<String>,
        decimals: u8,
    ) -> Self {
        self.tokens.insert(
            symbol.into(),
            TokenInfo {
                mint: mint.into(),
                decimals,
            },
        );
        self
    }

    pub fn with_input_amount(mut self, symbol: impl Into<String>, amount: u64) -> Self {
        self.input_amounts.insert(symbol.into(), amount);
        self
    }

    pub fn with_pair(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.pairs.push(TradingPair::new(input, output));
        self
    }

    /// Pairs in declaration order.
    pub fn pairs(&self) -> &[TradingPair] {
        &self.pairs
    }

    /// Looks up a token; empty mints count as missing.
    pub fn token(&self, symbol: &str) -> Option<&TokenInfo> {
        self.tokens.get(symbol).filter(|t| !t.mint.is_empty())
    }

    /// Looks up the quoted amount; zero counts as missing.
    pub fn input_amount(&self, symbol: &str) -> Option<u64> {
        self.input_amounts.get(symbol).copied().filter(|a| *a > 0)
    }

    /// Lists every configured pair that cannot be quoted, with the symbols at fault.
    pub fn validate(&self) -> Vec<UnresolvedPair> {
        self.pairs
            .iter()
            .filter_map(|pair| {
                let mut missing = Vec::new();
                if self.token(&pair.input).is_none() {
                    missing.push(format!("{} (mint)", pair.input));
                }
                if self.input_amount(&pair.input).is_none() {
                    missing.push(format!("{} (input amount)", pair.input));
                }
                if self.token(&pair.output).is_none() {
                    missing.push(format!("{} (mint)", pair.output));
                }
                (!missing.is_empty()).then(|| UnresolvedPair {
                    pair: pair.clone(),
                    missing,
                })
            })
            .collect()
    }
}
