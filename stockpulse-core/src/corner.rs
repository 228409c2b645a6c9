//! Strategy corner: the headline read-out at the top of the dashboard.
//!
//! The numbers are illustrative constants, like the rest of the analytics.
//! Only the combined-signal rule and the cost estimate are computed.

use serde::Serialize;

use crate::domain::{Signal, Strategy, StrategyAnalysis};

/// Z-score beyond which mean reversion agrees with the neural net.
pub const Z_SCORE_TRIGGER: f64 = 1.5;

/// The market-wide analysis shown in the corner.
pub fn headline_analysis() -> StrategyAnalysis {
    StrategyAnalysis {
        iqr_z_score: -1.8,
        weighted_signal: 0.72,
        ml_confidence: 0.87,
        nn_probability: 0.78,
        long_threshold: 0.56,
        short_threshold: 0.45,
        calmar_ratio: 10.46,
        sharpe_ratio: 4.29,
        max_drawdown: -2.97,
        annual_return: 34.6,
    }
}

/// BUY when the net is above the long threshold and price is stretched low,
/// SELL for the mirror case, HOLD otherwise.
pub fn combined_signal(analysis: &StrategyAnalysis) -> Signal {
    let nn = analysis.nn_probability;
    let z = analysis.iqr_z_score;
    if nn > analysis.long_threshold && z < -Z_SCORE_TRIGGER {
        Signal::Buy
    } else if nn < analysis.short_threshold && z > Z_SCORE_TRIGGER {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

/// Estimated round-trip transaction cost for `capital` rupees.
///
/// `round_trip_fraction` is the total cost as a fraction of capital; see
/// [`crate::config::DashboardConfig::round_trip_cost`].
pub fn transaction_cost(capital: u64, round_trip_fraction: f64) -> f64 {
    capital as f64 * round_trip_fraction
}

/// One stage of the signal pipeline as listed in the corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineStage {
    pub step: u8,
    pub strategy: Strategy,
    pub caption: &'static str,
}

pub const PIPELINE: [PipelineStage; 5] = [
    PipelineStage {
        step: 1,
        strategy: Strategy::IqrZscore,
        caption: "Mean Reversion",
    },
    PipelineStage {
        step: 2,
        strategy: Strategy::WeightedLinear,
        caption: "Correlation Signal",
    },
    PipelineStage {
        step: 3,
        strategy: Strategy::MlEnsemble,
        caption: "CatBoost+XGB+LGBM",
    },
    PipelineStage {
        step: 4,
        strategy: Strategy::NeuralNet,
        caption: "128→64→32 NN",
    },
    PipelineStage {
        step: 5,
        strategy: Strategy::Hybrid,
        caption: "Combined Signal",
    },
];

impl PipelineStage {
    /// Short heading such as `1. IQR Z-Score`.
    pub fn heading(&self) -> String {
        let name = match self.strategy {
            Strategy::Hybrid => "Hybrid",
            other => other.label(),
        };
        format!("{}. {name}", self.step)
    }
}
