//! Fixed cadence, generation bounds and canned texts.

/// Seconds between two automatic watch-list refreshes.
pub const REFRESH_INTERVAL_SECS: u64 = 60;

/// Base price used for any symbol missing from the symbol table.
pub const DEFAULT_BASE_PRICE: f64 = 100.0;

/// Largest relative distance of a generated price from its base price.
pub const PRICE_SWING: f64 = 0.02;

/// Inclusive lower bound of a synthetic daily volume.
pub const VOLUME_MIN: u64 = 500_000;
/// Exclusive upper bound of a synthetic daily volume.
pub const VOLUME_MAX: u64 = 1_500_000;

/// Day range half-width relative to the current price.
pub const DAY_RANGE: f64 = 0.02;
/// 52-week range half-width relative to the current price.
pub const WEEK_RANGE: f64 = 0.1;

/// Reply for questions that mention none of the supported instruments.
pub const FALLBACK_MESSAGE: &str = "I can provide information about S&P 500, Dow Jones, NASDAQ, Gold, and Bitcoin. Please ask about one of these.";

/// First assistant message of every session.
pub const GREETING: &str = "Hello! I'm your market assistant. Ask me about the S&P 500, Dow Jones, NASDAQ, Gold, or Bitcoin.";
