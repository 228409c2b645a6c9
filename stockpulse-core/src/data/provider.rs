//! Data provider trait and its two implementations.
//!
//! The MarketDataProvider trait abstracts over where records come from (the
//! built-in fixtures, a JSON export, or a future live feed) so the filter
//! engine never depends on a source.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{FnOContract, IpoListing, StockAlert};
use crate::error::DataError;

use super::fixtures;

/// Source of the three record collections.
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    fn fetch_stocks(&self) -> Result<Vec<StockAlert>, DataError>;

    fn fetch_contracts(&self) -> Result<Vec<FnOContract>, DataError>;

    fn fetch_ipos(&self) -> Result<Vec<IpoListing>, DataError>;
}

/// The built-in static fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFixtures;

impl MarketDataProvider for StaticFixtures {
    fn name(&self) -> &str {
        "built-in fixtures"
    }

    fn fetch_stocks(&self) -> Result<Vec<StockAlert>, DataError> {
        Ok(fixtures::stock_alerts())
    }

    fn fetch_contracts(&self) -> Result<Vec<FnOContract>, DataError> {
        Ok(fixtures::fno_contracts())
    }

    fn fetch_ipos(&self) -> Result<Vec<IpoListing>, DataError> {
        Ok(fixtures::ipo_listings())
    }
}

/// Serialized form of a complete fixture set.
///
/// ```json
/// { "stocks": [...], "contracts": [...], "ipos": [...] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureSet {
    #[serde(default)]
    pub stocks: Vec<StockAlert>,
    #[serde(default)]
    pub contracts: Vec<FnOContract>,
    #[serde(default)]
    pub ipos: Vec<IpoListing>,
}

impl FixtureSet {
    /// Collect everything a provider offers.
    pub fn from_provider(provider: &dyn MarketDataProvider) -> Result<Self, DataError> {
        Ok(Self {
            stocks: provider.fetch_stocks()?,
            contracts: provider.fetch_contracts()?,
            ipos: provider.fetch_ipos()?,
        })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Fixture set loaded from a JSON file.
///
/// The file is read once in [`JsonFileProvider::open`]; fetches hand out
/// clones of the parsed records.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
    set: FixtureSet,
}

impl JsonFileProvider {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| DataError::Io {
            path: path.clone(),
            source,
        })?;
        let set = Self::parse(&path, &content)?;
        tracing::debug!(
            path = %path.display(),
            stocks = set.stocks.len(),
            contracts = set.contracts.len(),
            ipos = set.ipos.len(),
            "parsed fixture file"
        );
        Ok(Self { path, set })
    }

    fn parse(path: &Path, content: &str) -> Result<FixtureSet, DataError> {
        serde_json::from_str(content).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MarketDataProvider for JsonFileProvider {
    fn name(&self) -> &str {
        "json file"
    }

    fn fetch_stocks(&self) -> Result<Vec<StockAlert>, DataError> {
        Ok(self.set.stocks.clone())
    }

    fn fetch_contracts(&self) -> Result<Vec<FnOContract>, DataError> {
        Ok(self.set.contracts.clone())
    }

    fn fetch_ipos(&self) -> Result<Vec<IpoListing>, DataError> {
        Ok(self.set.ipos.clone())
    }
}
