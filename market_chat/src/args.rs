//! Command-line arguments for the market chat.
//!
//! This module defines the CLI interface using `clap` and resolves it into a
//! `ChatConfig`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use market_common::config::REFRESH_INTERVAL_SECS;
use market_common::random::StdRandom;
use market_common::{ChatError, Result};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seconds between automatic watch-list refreshes.
    #[clap(long, default_value_t = REFRESH_INTERVAL_SECS)]
    pub refresh_secs: u64,

    /// Seed for reproducible quotes and reports.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Disable the periodic timer; quotes refresh on startup and on `/refresh` only.
    #[clap(long)]
    pub no_auto_refresh: bool,
}

/// Resolved session settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Timer period, `None` when automatic refresh is off.
    pub refresh_interval: Option<Duration>,
    /// Seed shared by the feed and the responder.
    pub seed: Option<u64>,
}

impl Args {
    /// Validates the arguments.
    pub fn config(&self) -> Result<ChatConfig> {
        if self.refresh_secs == 0 {
            return Err(ChatError::Format(
                "--refresh-secs must be at least 1".to_string(),
            ));
        }
        let refresh_interval =
            (!self.no_auto_refresh).then(|| Duration::from_secs(self.refresh_secs));
        Ok(ChatConfig {
            refresh_interval,
            seed: self.seed,
        })
    }
}

impl ChatConfig {
    /// Independent sources for the refresh task and the responder.
    pub fn random_sources(&self) -> (StdRandom, StdRandom) {
        match self.seed {
            Some(seed) => (StdRandom::seeded(seed), StdRandom::seeded(seed.wrapping_add(1))),
            None => (StdRandom::from_entropy(), StdRandom::from_entropy()),
        }
    }
}
