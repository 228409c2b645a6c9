//! StockPulse Core: domain types, fixture store, filter engine and onboarding.
//!
//! This crate holds everything the dashboard computes:
//! - Domain records (stock alerts, F&O contracts, IPO listings) and their enums
//! - The `MarketDataProvider` trait and the immutable `MarketSnapshot`
//! - Pure, order-preserving filters over each collection
//! - Signal counts and mean confidence over a filtered view
//! - The three-step onboarding wizard
//! - Strategy corner read-out, Indian-number formatting, TOML configuration

pub mod config;
pub mod corner;
pub mod data;
pub mod domain;
pub mod error;
pub mod format;
pub mod onboarding;
pub mod query;
pub mod summary;

pub use config::DashboardConfig;
pub use data::{MarketDataProvider, MarketSnapshot};
pub use error::{ConfigError, DataError, OnboardingError, ParseEnumError};
pub use onboarding::{InvestorProfile, Onboarding, OnboardingCompletion, OnboardingStep};
pub use query::{ContractFilter, IpoFilter, Selection, StockFilter};
pub use summary::MarketSummary;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the snapshot, filters and wizard are Send + Sync,
    /// so a live provider can hand them across threads later.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Records
        require_send::<domain::StockAlert>();
        require_sync::<domain::StockAlert>();
        require_send::<domain::FnOContract>();
        require_sync::<domain::FnOContract>();
        require_send::<domain::IpoListing>();
        require_sync::<domain::IpoListing>();

        // Store
        require_send::<MarketSnapshot>();
        require_sync::<MarketSnapshot>();
        require_send::<data::StaticFixtures>();
        require_sync::<data::StaticFixtures>();
        require_send::<data::JsonFileProvider>();
        require_sync::<data::JsonFileProvider>();
        require_send::<Box<dyn MarketDataProvider>>();
        require_sync::<Box<dyn MarketDataProvider>>();

        // Session state
        require_send::<StockFilter>();
        require_sync::<StockFilter>();
        require_send::<ContractFilter>();
        require_sync::<ContractFilter>();
        require_send::<IpoFilter>();
        require_sync::<IpoFilter>();
        require_send::<Onboarding>();
        require_sync::<Onboarding>();
        require_send::<DashboardConfig>();
        require_sync::<DashboardConfig>();
    }

    /// The filter engine never sees where records came from: it takes plain
    /// slices, so any provider's output can be filtered.
    #[test]
    fn filters_take_plain_slices() {
        let snapshot = MarketSnapshot::load(&data::StaticFixtures).unwrap();
        let from_snapshot = query::filter_stocks(snapshot.stocks(), &StockFilter::default());
        assert_eq!(from_snapshot.len(), 12);

        let owned = data::fixtures::stock_alerts();
        let from_vec = query::filter_stocks(&owned, &StockFilter::default());
        assert_eq!(from_vec.len(), from_snapshot.len());
    }
}
