//! Application state: single-owner, main-thread only.
//!
//! Everything the UI shows is derived from `snapshot` and `filters` on every
//! frame; nothing here caches a filtered view.

use chrono::{Local, NaiveDateTime};

use stockpulse_core::domain::{
    FnOContract, HoldingPeriod, IpoListing, IpoStatus, Sector, Signal, StockAlert, Strategy,
    StrategySet,
};
use stockpulse_core::onboarding::{InvestorProfile, Onboarding, OnboardingCompletion};
use stockpulse_core::query::{
    filter_contracts, filter_ipos, filter_stocks, ContractFilter, IpoFilter, Selection,
    StockFilter,
};
use stockpulse_core::summary::{summarize, MarketSummary};
use stockpulse_core::{DashboardConfig, MarketSnapshot};

/// Onboarding wizard or the dashboard proper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Dashboard,
}

/// Which dashboard tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Stocks,
    Fno,
    Ipo,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Stocks, Tab::Fno, Tab::Ipo];

    pub fn index(self) -> usize {
        match self {
            Tab::Stocks => 0,
            Tab::Fno => 1,
            Tab::Ipo => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Tab::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Stocks => "Stocks",
            Tab::Fno => "F&O",
            Tab::Ipo => "IPO",
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Search,
    Help,
    /// Detail card for the row at this index of the active tab's view.
    Detail(usize),
}

/// Session filter state.
///
/// Search text and signal are shared by all three tabs; sector and the
/// strategy set apply to stocks only; status applies to IPOs only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search: String,
    pub signal: Selection<Signal>,
    pub sector: Selection<Sector>,
    pub strategies: StrategySet,
    pub ipo_status: Selection<IpoStatus>,
}

impl FilterState {
    pub fn stock_filter(&self) -> StockFilter {
        StockFilter {
            strategies: self.strategies.clone(),
            signal: self.signal,
            sector: self.sector,
            search: self.search.clone(),
        }
    }

    pub fn contract_filter(&self) -> ContractFilter {
        ContractFilter {
            signal: self.signal,
            search: self.search.clone(),
        }
    }

    pub fn ipo_filter(&self) -> IpoFilter {
        IpoFilter {
            status: self.ipo_status,
            search: self.search.clone(),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }
}

/// Onboarding screen state: the core wizard plus the highlighted holding row.
#[derive(Debug, Clone)]
pub struct OnboardingState {
    pub wizard: Onboarding,
    pub holding_cursor: usize,
}

impl OnboardingState {
    pub fn new(min_investment: u64) -> Self {
        Self {
            wizard: Onboarding::new(min_investment),
            holding_cursor: HoldingPeriod::ALL
                .iter()
                .position(|h| *h == HoldingPeriod::default())
                .unwrap_or(0),
        }
    }

    pub fn highlighted_holding(&self) -> HoldingPeriod {
        HoldingPeriod::ALL[self.holding_cursor.min(HoldingPeriod::ALL.len() - 1)]
    }
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub screen: Screen,
    pub active_tab: Tab,
    pub running: bool,

    // Data
    pub snapshot: MarketSnapshot,
    pub config: DashboardConfig,
    pub profile: InvestorProfile,

    // Session
    pub onboarding: OnboardingState,
    pub filters: FilterState,
    /// Row cursor per tab, indexed by `Tab::index`.
    pub cursors: [usize; 3],
    /// Strategy chip under the `[`/`]` cursor on the stocks tab.
    pub strategy_cursor: usize,

    // Cross-cutting
    pub overlay: Overlay,
    pub search_input: String,
    pub status_message: Option<(String, StatusLevel)>,
    pub started_at: NaiveDateTime,
}

impl AppState {
    pub fn new(snapshot: MarketSnapshot, config: DashboardConfig) -> Self {
        let onboarding = OnboardingState::new(config.min_investment);
        Self {
            screen: Screen::Onboarding,
            active_tab: Tab::Stocks,
            running: true,
            snapshot,
            config,
            profile: InvestorProfile::default(),
            onboarding,
            filters: FilterState::default(),
            cursors: [0; 3],
            strategy_cursor: 0,
            overlay: Overlay::None,
            search_input: String::new(),
            status_message: None,
            started_at: Local::now().naive_local(),
        }
    }

    /// Apply the wizard's completion event and switch to the dashboard.
    pub fn finish_onboarding(&mut self, completion: OnboardingCompletion) {
        self.profile = completion.into();
        self.screen = Screen::Dashboard;
        self.set_status(format!(
            "Profile set: {} for {}",
            stockpulse_core::format::format_rupees(self.profile.amount),
            self.profile.holding.label()
        ));
    }

    // ── Derived views ────────────────────────────────────────────────

    pub fn visible_stocks(&self) -> Vec<&StockAlert> {
        filter_stocks(self.snapshot.stocks(), &self.filters.stock_filter())
    }

    pub fn visible_contracts(&self) -> Vec<&FnOContract> {
        filter_contracts(self.snapshot.contracts(), &self.filters.contract_filter())
    }

    pub fn visible_ipos(&self) -> Vec<&IpoListing> {
        filter_ipos(self.snapshot.ipos(), &self.filters.ipo_filter())
    }

    /// Market stats over the currently visible stocks.
    pub fn summary(&self) -> MarketSummary {
        summarize(self.visible_stocks())
    }

    pub fn visible_len(&self, tab: Tab) -> usize {
        match tab {
            Tab::Stocks => self.visible_stocks().len(),
            Tab::Fno => self.visible_contracts().len(),
            Tab::Ipo => self.visible_ipos().len(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursors[self.active_tab.index()]
    }

    // ── Cursor movement ──────────────────────────────────────────────

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_len(self.active_tab);
        let slot = &mut self.cursors[self.active_tab.index()];
        if len == 0 {
            *slot = 0;
            return;
        }
        let next = (*slot as isize + delta).clamp(0, len as isize - 1);
        *slot = next as usize;
    }

    /// Pull every cursor back inside its view after a filter change.
    pub fn clamp_cursors(&mut self) {
        for tab in Tab::ALL {
            let len = self.visible_len(tab);
            let slot = &mut self.cursors[tab.index()];
            *slot = (*slot).min(len.saturating_sub(1));
        }
    }

    pub fn highlighted_strategy(&self) -> Strategy {
        Strategy::ALL[self.strategy_cursor % Strategy::ALL.len()]
    }

    // ── Filter edits ─────────────────────────────────────────────────

    pub fn set_search(&mut self, search: String) {
        self.filters.search = search;
        self.clamp_cursors();
    }

    pub fn cycle_signal(&mut self) {
        self.filters.signal = self.filters.signal.cycle(&Signal::ALL);
        self.clamp_cursors();
        self.set_status(format!("Signal: {}", self.filters.signal));
    }

    pub fn cycle_sector(&mut self) {
        self.filters.sector = self.filters.sector.cycle(&Sector::ALL);
        self.clamp_cursors();
        let label = match self.filters.sector {
            Selection::All => "All sectors",
            Selection::Only(sector) => sector.label(),
        };
        self.set_status(format!("Sector: {label}"));
    }

    pub fn cycle_ipo_status(&mut self) {
        self.filters.ipo_status = self.filters.ipo_status.cycle(&IpoStatus::ALL);
        self.clamp_cursors();
        let label = match self.filters.ipo_status {
            Selection::All => "All IPOs",
            Selection::Only(status) => status.label(),
        };
        self.set_status(format!("Status: {label}"));
    }

    pub fn toggle_highlighted_strategy(&mut self) {
        let strategy = self.highlighted_strategy();
        let now_on = self.filters.strategies.toggle(strategy);
        self.clamp_cursors();
        let state = if now_on { "on" } else { "off" };
        self.set_status(format!("{} {state}", strategy.label()));
        if self.filters.strategies.is_empty() {
            self.set_warning("No strategies selected: nothing will match");
        }
    }

    pub fn set_all_strategies(&mut self, on: bool) {
        self.filters.strategies = if on {
            StrategySet::full()
        } else {
            StrategySet::empty()
        };
        self.clamp_cursors();
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.cursors = [0; 3];
        self.set_status("Filters reset");
    }

    // ── Status ───────────────────────────────────────────────────────

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
