//! Symbol table shared by the generator, the responder and the watch list.
//!
//! The table is fixed and ordered: iteration order (`Symbol::iter()`) is the
//! order in which the responder tries display names and the order in which the
//! watch list is rendered. Strings that are not in the table are still valid
//! raw symbols; they resolve to `DEFAULT_BASE_PRICE` and have no display name.
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::config::DEFAULT_BASE_PRICE;

/// Instruments known to the mock market.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Hash,
    Eq,
    PartialEq,
)]
pub enum Symbol {
    /// S&P 500 index.
    #[strum(serialize = "^GSPC")]
    #[serde(rename = "^GSPC")]
    SP500,
    /// Dow Jones Industrial Average.
    #[strum(serialize = "^DJI")]
    #[serde(rename = "^DJI")]
    DowJones,
    /// NASDAQ Composite.
    #[strum(serialize = "^IXIC")]
    #[serde(rename = "^IXIC")]
    Nasdaq,
    /// Gold futures.
    #[strum(serialize = "GC=F")]
    #[serde(rename = "GC=F")]
    Gold,
    /// Bitcoin priced in US dollars.
    #[strum(serialize = "BTC-USD")]
    #[serde(rename = "BTC-USD")]
    Bitcoin,
}

impl Symbol {
    /// Ticker-like code, e.g. `^GSPC`.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Human-readable name used in reports and matched by the responder.
    pub fn display_name(self) -> &'static str {
        match self {
            Symbol::SP500 => "S&P 500",
            Symbol::DowJones => "Dow Jones",
            Symbol::Nasdaq => "NASDAQ",
            Symbol::Gold => "Gold",
            Symbol::Bitcoin => "Bitcoin",
        }
    }

    /// Anchor price around which quotes are generated.
    pub fn base_price(self) -> f64 {
        match self {
            Symbol::SP500 => 4500.0,
            Symbol::DowJones => 35000.0,
            Symbol::Nasdaq => 14000.0,
            Symbol::Gold => 2000.0,
            Symbol::Bitcoin => 45000.0,
        }
    }
}

/// Resolves a raw symbol string. Lookup is exact and case-sensitive.
pub fn lookup(raw: &str) -> Option<Symbol> {
    raw.parse().ok()
}

/// Base price for any raw symbol, falling back to `DEFAULT_BASE_PRICE`.
pub fn base_price(raw: &str) -> f64 {
    lookup(raw).map_or(DEFAULT_BASE_PRICE, Symbol::base_price)
}

/// Display name for a raw symbol, if it is in the table.
pub fn display_name(raw: &str) -> Option<&'static str> {
    lookup(raw).map(Symbol::display_name)
}

/// The fixed watch list, in table order.
pub fn watch_list() -> Vec<Symbol> {
    Symbol::iter().collect()
}
