//! Test helpers for building app state over the built-in fixtures.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use stockpulse_core::data::StaticFixtures;
use stockpulse_core::domain::HoldingPeriod;
use stockpulse_core::onboarding::OnboardingCompletion;
use stockpulse_core::{DashboardConfig, MarketSnapshot};

use crate::app::AppState;

/// Fresh app on the onboarding screen.
pub fn onboarding_app() -> AppState {
    let snapshot = MarketSnapshot::load(&StaticFixtures).unwrap();
    AppState::new(snapshot, DashboardConfig::default())
}

/// App that has already completed onboarding with the default profile.
pub fn dashboard_app() -> AppState {
    let mut app = onboarding_app();
    app.finish_onboarding(OnboardingCompletion {
        amount: 100_000,
        holding: HoldingPeriod::Short,
    });
    app.status_message = None;
    app
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}
