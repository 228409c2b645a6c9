//! Trading signal and the five analytical strategy models.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parse_code;
use crate::error::ParseEnumError;

/// Categorical trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    pub const ALL: [Signal; 3] = [Signal::Buy, Signal::Sell, Signal::Hold];

    /// Wire/display code ("BUY", "SELL", "HOLD").
    pub fn code(self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Signal {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s, &Signal::ALL, |v| v.code(), "signal")
    }
}

/// The analytical model a signal is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    IqrZscore,
    WeightedLinear,
    MlEnsemble,
    NeuralNet,
    Hybrid,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::IqrZscore,
        Strategy::WeightedLinear,
        Strategy::MlEnsemble,
        Strategy::NeuralNet,
        Strategy::Hybrid,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Strategy::IqrZscore => "IQR_ZSCORE",
            Strategy::WeightedLinear => "WEIGHTED_LINEAR",
            Strategy::MlEnsemble => "ML_ENSEMBLE",
            Strategy::NeuralNet => "NEURAL_NET",
            Strategy::Hybrid => "HYBRID",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::IqrZscore => "IQR Z-Score",
            Strategy::WeightedLinear => "Weighted Linear",
            Strategy::MlEnsemble => "ML Ensemble",
            Strategy::NeuralNet => "Neural Net",
            Strategy::Hybrid => "Hybrid Signal",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Strategy::IqrZscore => {
                "Mean reversion using IQR-normalized Z-scores. Buy if Z<-2, Sell if Z>2"
            }
            Strategy::WeightedLinear => "Correlation-weighted signal with logistic calibration",
            Strategy::MlEnsemble => {
                "CatBoost + XGBoost + LightGBM ensemble with 65% confidence filter"
            }
            Strategy::NeuralNet => "128→64→32 feed-forward NN with learned long/short thresholds",
            Strategy::Hybrid => "Combined mean-reversion + deep-learned directional confidence",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Strategy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s, &Strategy::ALL, |v| v.code(), "strategy")
    }
}

/// Set of active strategies. Defaults to all five.
///
/// An empty set is a valid state: nothing passes a stock filter built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySet(BTreeSet<Strategy>);

impl StrategySet {
    pub fn full() -> Self {
        Self(Strategy::ALL.into_iter().collect())
    }

    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, strategy: Strategy) -> bool {
        self.0.contains(&strategy)
    }

    /// Flip membership of one strategy. Returns whether it is now active.
    pub fn toggle(&mut self, strategy: Strategy) -> bool {
        if self.0.remove(&strategy) {
            false
        } else {
            self.0.insert(strategy);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() == Strategy::ALL.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Strategy> + '_ {
        self.0.iter().copied()
    }
}

impl Default for StrategySet {
    fn default() -> Self {
        Self::full()
    }
}

impl FromIterator<Strategy> for StrategySet {
    fn from_iter<I: IntoIterator<Item = Strategy>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_parses_case_insensitively() {
        assert_eq!("buy".parse::<Signal>().unwrap(), Signal::Buy);
        assert_eq!("SELL".parse::<Signal>().unwrap(), Signal::Sell);
        assert!("short".parse::<Signal>().is_err());
    }

    #[test]
    fn strategy_serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&Strategy::IqrZscore).unwrap();
        assert_eq!(json, "\"IQR_ZSCORE\"");
        let back: Strategy = serde_json::from_str("\"NEURAL_NET\"").unwrap();
        assert_eq!(back, Strategy::NeuralNet);
    }

    #[test]
    fn strategy_set_toggle() {
        let mut set = StrategySet::default();
        assert!(set.is_full());
        assert!(!set.toggle(Strategy::Hybrid));
        assert!(!set.contains(Strategy::Hybrid));
        assert_eq!(set.len(), 4);
        assert!(set.toggle(Strategy::Hybrid));
        assert!(set.is_full());
    }
}
