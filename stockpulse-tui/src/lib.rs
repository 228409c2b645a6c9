//! StockPulse TUI: onboarding wizard and a three-tab market dashboard.
//!
//! Screens:
//! - Onboarding: investment amount, holding period, profile summary
//! - Dashboard: Stocks, F&O and IPO tabs under a strategy corner read-out
//!
//! Overlays: live search, keyboard help, per-row detail.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
