//! Detail report for a single symbol.
//!
//! One quote provides the reference price. Volume is drawn separately from
//! `[VOLUME_MIN, VOLUME_MAX)` and the ranges are fixed multiples of the price,
//! so the report is internally consistent but unrelated to any previous one.
use std::fmt;

use market_common::config::{DAY_RANGE, VOLUME_MAX, VOLUME_MIN, WEEK_RANGE};
use market_common::{RandomSource, symbols};

use crate::model::quote_generator::QuoteGenerator;

/// Figures behind a detail report.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// `"{display name} ({symbol})"`, or the raw symbol when it is unknown.
    pub header: String,
    /// Current price from the generator.
    pub price: f64,
    /// `price * 0.98`.
    pub day_low: f64,
    /// `price * 1.02`.
    pub day_high: f64,
    /// `price * 0.9`.
    pub week_low: f64,
    /// `price * 1.1`.
    pub week_high: f64,
    /// Synthetic daily volume.
    pub volume: u64,
    /// `price * volume`.
    pub market_cap: f64,
}

impl Analysis {
    /// Draws a fresh quote and volume for `symbol` and derives the rest.
    pub fn compute<R: RandomSource>(generator: &mut QuoteGenerator<R>, symbol: &str) -> Self {
        let price = generator.generate_quote(symbol).price;
        let volume = generator.rng().uniform_int(VOLUME_MIN, VOLUME_MAX);

        let header = match symbols::display_name(symbol) {
            Some(name) => format!("{name} ({symbol})"),
            None => symbol.to_string(),
        };

        Analysis {
            header,
            price,
            day_low: price * (1.0 - DAY_RANGE),
            day_high: price * (1.0 + DAY_RANGE),
            week_low: price * (1.0 - WEEK_RANGE),
            week_high: price * (1.0 + WEEK_RANGE),
            volume,
            market_cap: price * volume as f64,
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f, "Current Price: ${:.2}", self.price)?;
        writeln!(f, "Day Range: ${:.2} - ${:.2}", self.day_low, self.day_high)?;
        writeln!(f, "52-Week Range: ${:.2} - ${:.2}", self.week_low, self.week_high)?;
        writeln!(f, "Volume: {}", group_thousands(self.volume))?;
        write!(f, "Market Cap: ${:.2}B", self.market_cap / 1e9)
    }
}

/// Renders the detail report for `symbol`.
pub fn generate_analysis<R: RandomSource>(
    generator: &mut QuoteGenerator<R>,
    symbol: &str,
) -> String {
    Analysis::compute(generator, symbol).to_string()
}

/// `1234567` -> `"1,234,567"`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_common::random::{ScriptedRandom, StdRandom};

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(500_000), "500,000");
    }

    #[test]
    fn test_exact_report_with_scripted_source() {
        let mut generator =
            QuoteGenerator::new(ScriptedRandom::new(vec![0.0], vec![1_000_000]));
        let report = generate_analysis(&mut generator, "GC=F");
        let expected = "Gold (GC=F)\n\
                        Current Price: $2000.00\n\
                        Day Range: $1960.00 - $2040.00\n\
                        52-Week Range: $1800.00 - $2200.00\n\
                        Volume: 1,000,000\n\
                        Market Cap: $2.00B";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_derived_fields() {
        let mut generator = QuoteGenerator::new(StdRandom::seeded(11));
        let analysis = Analysis::compute(&mut generator, "^DJI");
        assert!((analysis.day_low - analysis.price * 0.98).abs() < 1e-6);
        assert!((analysis.day_high - analysis.price * 1.02).abs() < 1e-6);
        assert!((analysis.week_low - analysis.price * 0.9).abs() < 1e-6);
        assert!((analysis.week_high - analysis.price * 1.1).abs() < 1e-6);
        assert!((500_000..1_500_000).contains(&analysis.volume));
        assert!((analysis.market_cap - analysis.price * analysis.volume as f64).abs() < 1e-3);
    }

    #[test]
    fn test_unknown_symbol_header_is_raw() {
        let mut generator = QuoteGenerator::new(ScriptedRandom::new(vec![0.0], vec![500_000]));
        let report = generate_analysis(&mut generator, "DOGE");
        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("DOGE"));
        assert_eq!(lines.next(), Some("Current Price: $100.00"));
    }

    #[test]
    fn test_repeated_reports_share_header_but_differ() {
        let mut generator = QuoteGenerator::new(StdRandom::seeded(5));
        let first = generate_analysis(&mut generator, "BTC-USD");
        let second = generate_analysis(&mut generator, "BTC-USD");
        assert_eq!(first.lines().next(), Some("Bitcoin (BTC-USD)"));
        assert_eq!(first.lines().next(), second.lines().next());
        assert_ne!(first, second);
    }
}
