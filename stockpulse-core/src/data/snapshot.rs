//! Immutable in-memory snapshot of all three collections.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{FnOContract, IpoListing, StockAlert};
use crate::error::DataError;

use super::provider::MarketDataProvider;

/// Confidence is an integer percent.
const MAX_CONFIDENCE: u8 = 100;

/// Records loaded once at start-up.
///
/// Collections are shared slices; cloning a snapshot is cheap and nothing
/// hands out mutable access.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    source: String,
    stocks: Arc<[StockAlert]>,
    contracts: Arc<[FnOContract]>,
    ipos: Arc<[IpoListing]>,
}

impl MarketSnapshot {
    /// Pull every collection from `provider`, rejecting duplicate ids and
    /// confidences above 100.
    pub fn load(provider: &dyn MarketDataProvider) -> Result<Self, DataError> {
        let stocks = provider.fetch_stocks()?;
        let contracts = provider.fetch_contracts()?;
        let ipos = provider.fetch_ipos()?;

        check_unique("stock", stocks.iter().map(|s| s.id.as_str()))?;
        check_unique("contract", contracts.iter().map(|c| c.id.as_str()))?;
        check_unique("IPO", ipos.iter().map(|i| i.id.as_str()))?;
        check_confidence("stock", stocks.iter().map(|s| (s.id.as_str(), s.confidence)))?;
        check_confidence("contract", contracts.iter().map(|c| (c.id.as_str(), c.confidence)))?;

        tracing::info!(
            source = provider.name(),
            stocks = stocks.len(),
            contracts = contracts.len(),
            ipos = ipos.len(),
            "market snapshot loaded"
        );

        Ok(Self {
            source: provider.name().to_string(),
            stocks: stocks.into(),
            contracts: contracts.into(),
            ipos: ipos.into(),
        })
    }

    /// Name of the provider this snapshot came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn stocks(&self) -> &[StockAlert] {
        &self.stocks
    }

    pub fn contracts(&self) -> &[FnOContract] {
        &self.contracts
    }

    pub fn ipos(&self) -> &[IpoListing] {
        &self.ipos
    }
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_confidence<'a>(
    kind: &'static str,
    records: impl Iterator<Item = (&'a str, u8)>,
) -> Result<(), DataError> {
    for (id, confidence) in records {
        if confidence > MAX_CONFIDENCE {
            return Err(DataError::OutOfRange {
                kind,
                id: id.to_string(),
                field: "confidence",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::provider::StaticFixtures;
    use crate::data::fixtures;

    struct DuplicateStocks;

    impl MarketDataProvider for DuplicateStocks {
        fn name(&self) -> &str {
            "duplicates"
        }

        fn fetch_stocks(&self) -> Result<Vec<StockAlert>, DataError> {
            let mut stocks = fixtures::stock_alerts();
            stocks.push(stocks[0].clone());
            Ok(stocks)
        }

        fn fetch_contracts(&self) -> Result<Vec<FnOContract>, DataError> {
            Ok(Vec::new())
        }

        fn fetch_ipos(&self) -> Result<Vec<IpoListing>, DataError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn loads_static_fixtures() {
        let snapshot = MarketSnapshot::load(&StaticFixtures).unwrap();
        assert_eq!(snapshot.stocks().len(), 12);
        assert_eq!(snapshot.contracts().len(), 8);
        assert_eq!(snapshot.ipos().len(), 6);
        assert_eq!(snapshot.source(), "built-in fixtures");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = MarketSnapshot::load(&DuplicateStocks).unwrap_err();
        match err {
            DataError::DuplicateId { kind, id } => {
                assert_eq!(kind, "stock");
                assert_eq!(id, "1");
            }
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    struct OverconfidentContract;

    impl MarketDataProvider for OverconfidentContract {
        fn name(&self) -> &str {
            "overconfident"
        }

        fn fetch_stocks(&self) -> Result<Vec<StockAlert>, DataError> {
            Ok(fixtures::stock_alerts())
        }

        fn fetch_contracts(&self) -> Result<Vec<FnOContract>, DataError> {
            let mut contracts = fixtures::fno_contracts();
            contracts[0].confidence = 101;
            Ok(contracts)
        }

        fn fetch_ipos(&self) -> Result<Vec<IpoListing>, DataError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn confidence_above_100_is_rejected() {
        let err = MarketSnapshot::load(&OverconfidentContract).unwrap_err();
        match err {
            DataError::OutOfRange { kind, field, .. } => {
                assert_eq!(kind, "contract");
                assert_eq!(field, "confidence");
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn clones_share_storage() {
        let a = MarketSnapshot::load(&StaticFixtures).unwrap();
        let b = a.clone();
        assert!(std::ptr::eq(a.stocks().as_ptr(), b.stocks().as_ptr()));
    }
}
