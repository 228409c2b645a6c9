//! Filter engine: pure, order-preserving views over the snapshot.
//!
//! Every function here is a total function of (records, filter): no record is
//! mutated, output order follows input order, and a filter that matches
//! nothing yields an empty vector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    FnOContract, IpoListing, IpoStatus, Sector, Signal, StockAlert, StrategySet,
};

/// A categorical predicate: either everything, or exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: Copy> Selection<T> {
    /// Step through `All, variants[0], variants[1], ..., All`.
    pub fn cycle(self, variants: &[T]) -> Self
    where
        T: PartialEq,
    {
        match self {
            Selection::All => variants.first().copied().map_or(Selection::All, Selection::Only),
            Selection::Only(current) => variants
                .iter()
                .position(|v| *v == current)
                .and_then(|i| variants.get(i + 1))
                .copied()
                .map_or(Selection::All, Selection::Only),
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("ALL"),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// Lowercased search needle, or `None` when the search is empty.
fn needle(search: &str) -> Option<String> {
    (!search.is_empty()).then(|| search.to_lowercase())
}

/// Predicates for the stocks view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StockFilter {
    pub strategies: StrategySet,
    pub signal: Selection<Signal>,
    pub sector: Selection<Sector>,
    pub search: String,
}

/// Predicates for the F&O view. Search matches the symbol only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractFilter {
    pub signal: Selection<Signal>,
    pub search: String,
}

/// Predicates for the IPO view. Search matches company name or symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IpoFilter {
    pub status: Selection<IpoStatus>,
    pub search: String,
}

/// Stocks whose strategy is active and that satisfy signal, sector and search.
pub fn filter_stocks<'a>(records: &'a [StockAlert], filter: &StockFilter) -> Vec<&'a StockAlert> {
    let needle = needle(&filter.search);
    records
        .iter()
        .filter(|r| filter.strategies.contains(r.strategy))
        .filter(|r| filter.signal.matches(&r.signal))
        .filter(|r| filter.sector.matches(&r.sector))
        .filter(|r| needle.as_deref().map_or(true, |n| r.matches_lowercase(n)))
        .collect()
}

pub fn filter_contracts<'a>(
    records: &'a [FnOContract],
    filter: &ContractFilter,
) -> Vec<&'a FnOContract> {
    let needle = needle(&filter.search);
    records
        .iter()
        .filter(|r| filter.signal.matches(&r.signal))
        .filter(|r| needle.as_deref().map_or(true, |n| r.matches_lowercase(n)))
        .collect()
}

pub fn filter_ipos<'a>(records: &'a [IpoListing], filter: &IpoFilter) -> Vec<&'a IpoListing> {
    let needle = needle(&filter.search);
    records
        .iter()
        .filter(|r| filter.status.matches(&r.status))
        .filter(|r| needle.as_deref().map_or(true, |n| r.matches_lowercase(n)))
        .collect()
}
