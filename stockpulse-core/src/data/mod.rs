//! Fixture store: providers and the loaded snapshot.

pub mod fixtures;
pub mod provider;
pub mod snapshot;

pub use provider::{FixtureSet, JsonFileProvider, MarketDataProvider, StaticFixtures};
pub use snapshot::MarketSnapshot;
