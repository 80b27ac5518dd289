//! Mock market engine.
//!
//! Everything the chat front end needs to produce market data lives here:
//!
//! - `model::quote_generator` — `QuoteGenerator`, which perturbs a symbol's base
//!   price by at most ±2% to synthesize a `Quote`.
//! - `model::analysis` — the multi-line detail report built from one quote plus
//!   a random volume and derived ranges.
//! - `responder` — keyword routing from free text to a report, or a fixed help
//!   message when no instrument is mentioned.
//! - `refresh` — whole-watch-list refreshes, the `Snapshot` they produce, and the
//!   background `RefreshTask` that runs them on a timer and on request.
//!
//! All randomness goes through `market_common::RandomSource`, so every piece can
//! be driven by a seeded or scripted source.
#![warn(missing_docs)]
pub mod model;
pub mod refresh;
pub mod responder;

pub use model::analysis::{Analysis, generate_analysis};
pub use model::quote_generator::QuoteGenerator;
pub use refresh::{BusyFlag, RefreshHandle, RefreshTask, Snapshot, refresh_all};
pub use responder::Responder;
