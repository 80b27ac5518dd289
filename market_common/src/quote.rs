//! Synthetic quote payload.
//!
//! A `Quote` is what the generator produces and what a snapshot holds: the raw
//! symbol, the generated price, and the change against the symbol's base price.
use serde::{Deserialize, Serialize};

use crate::symbols;

/// Market quote for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Raw symbol string as requested (known or not).
    pub symbol: String,
    /// Generated price, `base + change`.
    pub price: f64,
    /// Absolute change against the base price.
    pub change: f64,
    /// `change / base * 100`.
    pub change_percent: f64,
}

impl Quote {
    /// Display name when the symbol is in the table, the raw symbol otherwise.
    pub fn label(&self) -> &str {
        symbols::display_name(&self.symbol).unwrap_or(self.symbol.as_str())
    }

    /// `true` when the price did not move down.
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}
