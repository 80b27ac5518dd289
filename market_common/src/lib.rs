//!
//! Common types and constants shared by the market feed and the chat front end.
//!
//! This crate aggregates:
//! - `error` — unified error type `ChatError` used across the workspace.
//! - `result` — handy `Result<T, ChatError>` alias.
//! - `symbols` — the fixed symbol table (codes, display names, base prices).
//! - `quote` — the synthetic `Quote` payload.
//! - `message` — chat transcript entries.
//! - `random` — injectable randomness behind the `RandomSource` trait.
//! - `config` — cadence, generation bounds and canned texts.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod message;
pub mod quote;
pub mod random;
pub mod result;
pub mod symbols;

pub use error::ChatError;
pub use message::{ChatMessage, Role};
pub use quote::Quote;
pub use random::RandomSource;
pub use result::Result;
pub use symbols::Symbol;
