//! Generation models.
//!
//! - `quote_generator` — bounded random quotes around fixed base prices.
//! - `analysis` — detail reports derived from a fresh quote.

pub mod analysis;
pub mod quote_generator;
