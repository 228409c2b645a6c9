//! Domain types for StockPulse

pub mod contract;
pub mod holding;
pub mod ipo;
pub mod sector;
pub mod signal;
pub mod stock;

pub use contract::{ContractType, FnOContract};
pub use holding::HoldingPeriod;
pub use ipo::{BoardType, IpoListing, IpoRating, IpoStatus};
pub use sector::{Exchange, Sector};
pub use signal::{Signal, Strategy, StrategySet};
pub use stock::{Bias, StockAlert, StrategyAnalysis};

use crate::error::ParseEnumError;

/// Parse a categorical code case-insensitively.
///
/// Hyphens and spaces are accepted in place of underscores, so
/// `"iqr-zscore"` and `"IQR_ZSCORE"` name the same strategy.
pub(crate) fn parse_code<T: Copy>(
    input: &str,
    variants: &[T],
    code: impl Fn(T) -> &'static str,
    kind: &'static str,
) -> Result<T, ParseEnumError> {
    let wanted: String = input
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect();
    variants
        .iter()
        .copied()
        .find(|v| code(*v).eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| ParseEnumError {
            kind,
            value: input.to_string(),
        })
}
