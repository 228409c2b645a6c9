//! End-to-end scenarios over the built-in fixture set.

use std::io::Write;

use stockpulse_core::corner::{combined_signal, headline_analysis, transaction_cost};
use stockpulse_core::data::{FixtureSet, JsonFileProvider, StaticFixtures};
use stockpulse_core::domain::{HoldingPeriod, IpoStatus, Sector, Signal};
use stockpulse_core::format::{format_gmp, format_inr};
use stockpulse_core::onboarding::{Onboarding, OnboardingStep};
use stockpulse_core::query::{filter_contracts, filter_ipos, filter_stocks};
use stockpulse_core::summary::summarize;
use stockpulse_core::{
    ContractFilter, DashboardConfig, IpoFilter, MarketSnapshot, OnboardingError, Selection,
    StockFilter,
};

fn snapshot() -> MarketSnapshot {
    MarketSnapshot::load(&StaticFixtures).expect("built-in fixtures load")
}

#[test]
fn buy_filter_returns_every_buy_alert() {
    let snap = snapshot();
    let filter = StockFilter {
        signal: Selection::Only(Signal::Buy),
        ..StockFilter::default()
    };
    let view = filter_stocks(snap.stocks(), &filter);
    let symbols: Vec<&str> = view.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(
        symbols,
        vec![
            "RELIANCE",
            "INFY",
            "TATAMOTORS",
            "ICICIBANK",
            "SUNPHARMA",
            "TATASTEEL",
            "BAJFINANCE"
        ]
    );

    let summary = summarize(view.iter().copied());
    assert_eq!(summary.buy_count, view.len());
    assert_eq!(summary.sell_count, 0);
    assert_eq!(summary.hold_count, 0);
    assert_eq!(summary.avg_confidence, Some(90));
}

#[test]
fn unfiltered_market_stats() {
    let snap = snapshot();
    let summary = summarize(filter_stocks(snap.stocks(), &StockFilter::default()));
    assert_eq!((summary.buy_count, summary.sell_count, summary.hold_count), (7, 4, 1));
    assert_eq!(summary.avg_confidence, Some(85));
}

#[test]
fn sector_filter_and_search_compose() {
    let snap = snapshot();
    let it = StockFilter {
        sector: Selection::Only(Sector::It),
        ..StockFilter::default()
    };
    let symbols: Vec<&str> = filter_stocks(snap.stocks(), &it)
        .iter()
        .map(|s| s.symbol.as_str())
        .collect();
    assert_eq!(symbols, vec!["TCS", "INFY", "WIPRO"]);

    let it_sell = StockFilter {
        signal: Selection::Only(Signal::Sell),
        search: "wip".into(),
        ..it
    };
    assert_eq!(filter_stocks(snap.stocks(), &it_sell).len(), 1);
}

#[test]
fn nifty_search_includes_banknifty() {
    let snap = snapshot();
    let filter = ContractFilter {
        search: "nifty".into(),
        ..ContractFilter::default()
    };
    let symbols: Vec<&str> = filter_contracts(snap.contracts(), &filter)
        .iter()
        .map(|c| c.symbol.as_str())
        .collect();
    assert_eq!(symbols.len(), 4);
    assert!(symbols.contains(&"NIFTY"));
    assert!(symbols.contains(&"BANKNIFTY"));
}

#[test]
fn no_match_is_empty_not_error() {
    let snap = snapshot();
    let filter = StockFilter {
        search: "zzzz".into(),
        ..StockFilter::default()
    };
    let view = filter_stocks(snap.stocks(), &filter);
    assert!(view.is_empty());
    assert_eq!(summarize(view).avg_confidence, None);
}

#[test]
fn open_ipos_with_gmp() {
    let snap = snapshot();
    let filter = IpoFilter {
        status: Selection::Only(IpoStatus::Open),
        ..IpoFilter::default()
    };
    let open = filter_ipos(snap.ipos(), &filter);
    assert!(!open.is_empty());
    assert!(open.iter().all(|i| i.status == IpoStatus::Open));
    for ipo in open {
        assert!(format_gmp(ipo.gmp).contains('₹'));
    }
}

#[test]
fn onboarding_guards() {
    let mut wizard = Onboarding::default();

    wizard.set_amount_text("999");
    assert!(matches!(
        wizard.advance(),
        Err(OnboardingError::AmountBelowMinimum { .. })
    ));
    wizard.set_amount_text("abc");
    assert_eq!(wizard.advance(), Err(OnboardingError::AmountMissing));
    assert_eq!(wizard.step(), OnboardingStep::AmountEntry);

    wizard.set_amount_text("1000");
    assert_eq!(wizard.advance(), Ok(OnboardingStep::HoldingSelect));

    assert_eq!(wizard.advance(), Err(OnboardingError::HoldingNotSelected));
    assert_eq!(wizard.step(), OnboardingStep::HoldingSelect);

    wizard.select_holding(HoldingPeriod::Intraday);
    assert_eq!(wizard.advance(), Ok(OnboardingStep::Summary));
    let done = wizard.complete().unwrap();
    assert_eq!(done.amount, 1000);
    assert_eq!(done.holding, HoldingPeriod::Intraday);
}

#[test]
fn below_minimum_message_uses_indian_grouping() {
    let mut wizard = Onboarding::default();
    wizard.set_amount_text("999");
    let err = wizard.advance().unwrap_err();
    assert_eq!(err.to_string(), "minimum ₹1,000 required");
}

#[test]
fn strategy_corner_readout() {
    assert_eq!(combined_signal(&headline_analysis()), Signal::Buy);
    let cost = transaction_cost(100_000, DashboardConfig::default().round_trip_cost());
    assert_eq!(format_inr(cost, 0), "₹40");
}

#[test]
fn exported_fixtures_load_back_identically() {
    let exported = FixtureSet::from_provider(&StaticFixtures).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(exported.to_json_pretty().unwrap().as_bytes())
        .unwrap();

    let provider = JsonFileProvider::open(file.path()).unwrap();
    let from_file = MarketSnapshot::load(&provider).unwrap();
    let built_in = snapshot();
    assert_eq!(from_file.stocks(), built_in.stocks());
    assert_eq!(from_file.contracts(), built_in.contracts());
    assert_eq!(from_file.ipos(), built_in.ipos());
    assert_eq!(from_file.source(), "json file");
}
