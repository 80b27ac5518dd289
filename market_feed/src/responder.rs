//! Keyword routing from free text to a detail report.
//!
//! The input is lowercased and the symbol table is walked in order; the first
//! symbol whose lowercased display name occurs anywhere in the text wins. There
//! is no word-boundary check and no ranking, so "goldfish" asks about Gold and a
//! question naming two instruments is answered for whichever comes first in the
//! table.

use log::debug;
use market_common::config::FALLBACK_MESSAGE;
use market_common::{RandomSource, Symbol};
use strum::IntoEnumIterator;

use crate::model::analysis::generate_analysis;
use crate::model::quote_generator::QuoteGenerator;

/// First table symbol whose display name is mentioned in `text`.
pub fn match_symbol(text: &str) -> Option<Symbol> {
    let normalized = text.to_lowercase();
    Symbol::iter().find(|symbol| normalized.contains(&symbol.display_name().to_lowercase()))
}

/// Answers chat questions with freshly generated reports.
#[derive(Debug, Clone)]
pub struct Responder<R> {
    generator: QuoteGenerator<R>,
}

impl<R: RandomSource> Responder<R> {
    /// Creates a responder generating reports from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            generator: QuoteGenerator::new(rng),
        }
    }

    /// Report for the first mentioned instrument, or the fixed help message.
    pub fn respond(&mut self, text: &str) -> String {
        match match_symbol(text) {
            Some(symbol) => {
                debug!("Question routed to {}", symbol);
                generate_analysis(&mut self.generator, symbol.code())
            }
            None => {
                debug!("No instrument mentioned in question");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
