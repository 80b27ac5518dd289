//! Synthetic quote generation.
//!
//! Each call draws `u` uniformly from `[-1, 1]` and moves the symbol's base price
//! by `u * base * PRICE_SWING`. There is no memory between calls: every quote is
//! anchored to the fixed base price, never to the previous quote, so prices
//! always stay within ±2% of the base.

use market_common::config::PRICE_SWING;
use market_common::{Quote, RandomSource, symbols};

/// Produces quotes from an injectable randomness source.
#[derive(Debug, Clone)]
pub struct QuoteGenerator<R> {
    rng: R,
}

impl<R: RandomSource> QuoteGenerator<R> {
    /// Creates a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a quote for any raw symbol.
    ///
    /// Symbols outside the table use `DEFAULT_BASE_PRICE`, so the function is
    /// total over all strings.
    pub fn generate_quote(&mut self, symbol: &str) -> Quote {
        let base = symbols::base_price(symbol);
        let change = self.rng.uniform(-1.0, 1.0) * base * PRICE_SWING;

        Quote {
            symbol: symbol.to_string(),
            price: base + change,
            change,
            change_percent: change / base * 100.0,
        }
    }

    /// Randomness shared with derived computations such as the detail report.
    pub(crate) fn rng(&mut self) -> &mut R {
        &mut self.rng
    }
}
