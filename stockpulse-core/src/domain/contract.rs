//! Futures & options contracts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::signal::Signal;

/// Derivative instrument kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Call,
    Put,
    Future,
}

impl ContractType {
    pub fn code(self) -> &'static str {
        match self {
            ContractType::Call => "CALL",
            ContractType::Put => "PUT",
            ContractType::Future => "FUTURE",
        }
    }

    /// Options carry a strike; futures do not.
    pub fn is_option(self) -> bool {
        match self {
            ContractType::Call | ContractType::Put => true,
            ContractType::Future => false,
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A derivatives recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FnOContract {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub contract_type: ContractType,
    /// Display string such as "27 Feb 2026".
    pub expiry: String,
    /// Zero for futures.
    pub strike_price: f64,
    /// Last traded price.
    pub ltp: f64,
    pub change: f64,
    pub change_percent: f64,
    /// Open interest, display string ("1.2Cr").
    pub oi: String,
    /// Signed display string ("+12.5L").
    pub oi_change: String,
    pub volume: String,
    /// Implied volatility in percent; zero for futures.
    pub iv: f64,
    pub signal: Signal,
    pub lot_size: u32,
    pub lots: u32,
    pub confidence: u8,
    pub reason: String,
}

impl FnOContract {
    /// Units covered by the recommended lots.
    pub fn total_quantity(&self) -> u64 {
        u64::from(self.lots) * u64::from(self.lot_size)
    }

    /// Strike, when the contract is an option.
    pub fn strike(&self) -> Option<f64> {
        self.contract_type.is_option().then_some(self.strike_price)
    }

    /// Implied volatility, when one is quoted.
    pub fn implied_volatility(&self) -> Option<f64> {
        (self.iv > 0.0).then_some(self.iv)
    }

    /// Whether the open-interest change is a build-up (leading '+').
    pub fn oi_building(&self) -> bool {
        self.oi_change.starts_with('+')
    }

    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.symbol.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_type_tag_is_renamed() {
        let json = r#"{
            "id": "f9", "symbol": "NIFTY", "name": "NIFTY 50 Index", "type": "FUTURE",
            "expiry": "27 Feb 2026", "strikePrice": 0, "ltp": 22150.0,
            "change": 10.0, "changePercent": 0.05, "oi": "1Cr", "oiChange": "-1L",
            "volume": "2L", "iv": 0, "signal": "HOLD", "lotSize": 25, "lots": 0,
            "confidence": 50, "reason": "flat"
        }"#;
        let contract: FnOContract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.contract_type, ContractType::Future);
        assert_eq!(contract.strike(), None);
        assert_eq!(contract.implied_volatility(), None);
        assert!(!contract.oi_building());
        assert_eq!(contract.total_quantity(), 0);
    }

    #[test]
    fn unknown_contract_type_is_rejected() {
        let err = serde_json::from_str::<ContractType>("\"SWAP\"");
        assert!(err.is_err());
    }
}
