//! Summary counters over the filtered stock list.

use serde::{Deserialize, Serialize};

use crate::domain::{Signal, StockAlert};

/// Signal counts and mean confidence for a set of alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarketSummary {
    pub buy_count: usize,
    pub sell_count: usize,
    pub hold_count: usize,
    /// Rounded mean confidence in percent. `None` for an empty input, where
    /// a mean is not applicable.
    pub avg_confidence: Option<u8>,
}

impl MarketSummary {
    pub fn total(&self) -> usize {
        self.buy_count + self.sell_count + self.hold_count
    }

    pub fn count(&self, signal: Signal) -> usize {
        match signal {
            Signal::Buy => self.buy_count,
            Signal::Sell => self.sell_count,
            Signal::Hold => self.hold_count,
        }
    }
}

/// Partition `stocks` by signal and average their confidence.
///
/// The mean rounds half up, so 84.5 becomes 85.
pub fn summarize<'a, I>(stocks: I) -> MarketSummary
where
    I: IntoIterator<Item = &'a StockAlert>,
{
    let mut summary = MarketSummary::default();
    let mut confidence_sum: u64 = 0;

    for alert in stocks {
        match alert.signal {
            Signal::Buy => summary.buy_count += 1,
            Signal::Sell => summary.sell_count += 1,
            Signal::Hold => summary.hold_count += 1,
        }
        confidence_sum += u64::from(alert.confidence);
    }

    let n = summary.total() as u64;
    if n > 0 {
        let rounded = (2 * confidence_sum + n) / (2 * n);
        summary.avg_confidence = Some(rounded.min(u64::from(u8::MAX)) as u8);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    #[test]
    fn full_fixture_summary() {
        let stocks = fixtures::stock_alerts();
        let summary = summarize(&stocks);
        assert_eq!(summary.buy_count, 7);
        assert_eq!(summary.sell_count, 4);
        assert_eq!(summary.hold_count, 1);
        // 1016 / 12 = 84.67
        assert_eq!(summary.avg_confidence, Some(85));
    }

    #[test]
    fn empty_input_has_no_average() {
        let summary = summarize(std::iter::empty());
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.avg_confidence, None);
    }

    #[test]
    fn half_rounds_up() {
        let mut stocks = fixtures::stock_alerts();
        stocks.truncate(2);
        stocks[0].confidence = 84;
        stocks[1].confidence = 85;
        assert_eq!(summarize(&stocks).avg_confidence, Some(85));
    }

    #[test]
    fn accepts_filtered_references() {
        let stocks = fixtures::stock_alerts();
        let holds: Vec<&StockAlert> = stocks.iter().filter(|s| s.signal == Signal::Hold).collect();
        let summary = summarize(holds.iter().copied());
        assert_eq!(summary.count(Signal::Hold), 1);
        assert_eq!(summary.avg_confidence, Some(52));
    }
}
