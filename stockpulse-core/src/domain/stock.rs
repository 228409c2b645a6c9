//! Equity alert record and the strategy analysis attached to it.

use serde::{Deserialize, Serialize};

use super::sector::{Exchange, Sector};
use super::signal::{Signal, Strategy};

/// Directional lean implied by the neural-net probability and the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bias {
    Bullish,
    Bearish,
    Neutral,
}

impl Bias {
    pub fn label(self) -> &'static str {
        match self {
            Bias::Bullish => "Bullish",
            Bias::Bearish => "Bearish",
            Bias::Neutral => "Neutral",
        }
    }
}

/// Quantitative signal components attributed to a [`StockAlert`].
///
/// The thresholds are expected to partition the probability space
/// (`short_threshold <= long_threshold`). Nothing validates this; fixtures
/// are trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyAnalysis {
    /// IQR-normalized z-score. Buy below -2, sell above 2.
    pub iqr_z_score: f64,
    /// Weighted linear signal in -1..=1.
    pub weighted_signal: f64,
    /// ML ensemble probability in 0..=1.
    pub ml_confidence: f64,
    /// Neural net output probability in 0..=1.
    pub nn_probability: f64,
    pub long_threshold: f64,
    pub short_threshold: f64,
    pub calmar_ratio: f64,
    pub sharpe_ratio: f64,
    /// Max drawdown in percent (negative).
    pub max_drawdown: f64,
    /// Annualized return in percent.
    pub annual_return: f64,
}

impl StrategyAnalysis {
    pub fn bias(&self) -> Bias {
        if self.nn_probability > self.long_threshold {
            Bias::Bullish
        } else if self.nn_probability < self.short_threshold {
            Bias::Bearish
        } else {
            Bias::Neutral
        }
    }
}

/// One trading recommendation for an equity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub exchange: Exchange,
    pub current_price: f64,
    pub target_price: f64,
    pub stop_loss: f64,
    pub signal: Signal,
    pub strategy: Strategy,
    /// Recommended share count; zero for HOLD by convention.
    pub quantity: u32,
    /// Integer percent, 0..=100.
    pub confidence: u8,
    pub change: f64,
    pub change_percent: f64,
    pub rsi: f64,
    /// Display string such as "12.4M".
    pub volume: String,
    /// Display string such as "2 min ago". Never parsed.
    pub timestamp: String,
    pub reason: String,
    pub sector: Sector,
    pub analysis: StrategyAnalysis,
    /// Expected daily return in percent; zero for HOLD.
    pub expected_return: f64,
}

impl StockAlert {
    /// Capital required for the recommended quantity at the current price.
    pub fn position_value(&self) -> f64 {
        self.current_price * f64::from(self.quantity)
    }

    /// Distance to target as a percent of the current price.
    pub fn upside_pct(&self) -> f64 {
        if self.current_price == 0.0 {
            return 0.0;
        }
        (self.target_price - self.current_price) / self.current_price * 100.0
    }

    /// Case-insensitive substring match on symbol or name.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.symbol.to_lowercase().contains(needle) || self.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(nn: f64) -> StrategyAnalysis {
        StrategyAnalysis {
            iqr_z_score: 0.0,
            weighted_signal: 0.0,
            ml_confidence: 0.5,
            nn_probability: nn,
            long_threshold: 0.56,
            short_threshold: 0.45,
            calmar_ratio: 1.0,
            sharpe_ratio: 1.0,
            max_drawdown: -1.0,
            annual_return: 10.0,
        }
    }

    #[test]
    fn bias_follows_thresholds() {
        assert_eq!(analysis(0.78).bias(), Bias::Bullish);
        assert_eq!(analysis(0.38).bias(), Bias::Bearish);
        assert_eq!(analysis(0.51).bias(), Bias::Neutral);
        // Boundaries are neutral.
        assert_eq!(analysis(0.56).bias(), Bias::Neutral);
        assert_eq!(analysis(0.45).bias(), Bias::Neutral);
    }

    #[test]
    fn analysis_uses_camel_case_keys() {
        let json = serde_json::to_value(analysis(0.5)).unwrap();
        assert!(json.get("iqrZScore").is_some());
        assert!(json.get("nnProbability").is_some());
        assert!(json.get("longThreshold").is_some());
    }
}
