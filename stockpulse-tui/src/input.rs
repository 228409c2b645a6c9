//! Keyboard input dispatch: onboarding, then overlays → global keys → tab keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use stockpulse_core::domain::HoldingPeriod;
use stockpulse_core::onboarding::{OnboardingStep, QUICK_AMOUNTS};

use crate::app::{AppState, Overlay, Screen, Tab};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    match app.screen {
        Screen::Onboarding => handle_onboarding_key(app, key),
        Screen::Dashboard => handle_dashboard_key(app, key),
    }
}

// ── Onboarding ───────────────────────────────────────────────────────

fn handle_onboarding_key(app: &mut AppState, key: KeyEvent) {
    match app.onboarding.wizard.step() {
        OnboardingStep::AmountEntry => handle_amount_key(app, key),
        OnboardingStep::HoldingSelect => handle_holding_key(app, key),
        OnboardingStep::Summary => handle_summary_key(app, key),
    }
}

fn handle_amount_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.running = false,
        KeyCode::Backspace => app.onboarding.wizard.backspace(),
        KeyCode::Char(c) => app.onboarding.wizard.push_char(c),
        KeyCode::Tab | KeyCode::Right => cycle_quick_amount(app, true),
        KeyCode::BackTab | KeyCode::Left => cycle_quick_amount(app, false),
        KeyCode::Enter => advance(app),
        _ => {}
    }
}

/// Step through the preset amounts, starting after the current amount.
fn cycle_quick_amount(app: &mut AppState, forward: bool) {
    let wizard = &mut app.onboarding.wizard;
    let current = wizard.amount();
    let pos = current.and_then(|a| QUICK_AMOUNTS.iter().position(|q| *q == a));
    let n = QUICK_AMOUNTS.len();
    let next = match (pos, forward) {
        (Some(i), true) => (i + 1) % n,
        (Some(i), false) => (i + n - 1) % n,
        (None, true) => 0,
        (None, false) => n - 1,
    };
    wizard.set_amount(QUICK_AMOUNTS[next]);
}

fn handle_holding_key(app: &mut AppState, key: KeyEvent) {
    let state = &mut app.onboarding;
    let last = HoldingPeriod::ALL.len() - 1;
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            state.holding_cursor = (state.holding_cursor + 1).min(last);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.holding_cursor = state.holding_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') => {
            let holding = state.highlighted_holding();
            state.wizard.select_holding(holding);
        }
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            state.holding_cursor = idx;
            state.wizard.select_holding(HoldingPeriod::ALL[idx]);
        }
        KeyCode::Esc | KeyCode::Backspace => {
            if state.wizard.back() {
                app.status_message = None;
            }
        }
        KeyCode::Enter => advance(app),
        _ => {}
    }
}

fn handle_summary_key(app: &mut AppState, key: KeyEvent) {
    if key.code != KeyCode::Enter {
        return;
    }
    match app.onboarding.wizard.complete() {
        Ok(completion) => app.finish_onboarding(completion),
        Err(err) => app.set_error(err.to_string()),
    }
}

fn advance(app: &mut AppState) {
    match app.onboarding.wizard.advance() {
        Ok(_) => app.status_message = None,
        Err(err) => app.set_warning(err.to_string()),
    }
}

// ── Dashboard ────────────────────────────────────────────────────────

fn handle_dashboard_key(app: &mut AppState, key: KeyEvent) {
    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Search => {
            handle_search_overlay(app, key);
            return;
        }
        Overlay::Help | Overlay::Detail(_) => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
            ) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(tab) = Tab::from_index(c as usize - '1' as usize) {
                app.active_tab = tab;
            }
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_tab = app.active_tab.prev();
            } else {
                app.active_tab = app.active_tab.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_tab = app.active_tab.prev();
            return;
        }
        KeyCode::Char('/') => {
            app.search_input = app.filters.search.clone();
            app.overlay = Overlay::Search;
            return;
        }
        KeyCode::Esc => {
            if !app.filters.search.is_empty() {
                app.set_search(String::new());
                app.set_status("Search cleared");
            }
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('s') => {
            app.cycle_signal();
            return;
        }
        KeyCode::Char('r') => {
            app.reset_filters();
            return;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_cursor(1);
            return;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_cursor(-1);
            return;
        }
        KeyCode::Enter => {
            if app.visible_len(app.active_tab) > 0 {
                app.overlay = Overlay::Detail(app.cursor());
            }
            return;
        }
        _ => {}
    }

    // 3. Tab-specific keys.
    match app.active_tab {
        Tab::Stocks => handle_stocks_key(app, key),
        Tab::Fno => {}
        Tab::Ipo => handle_ipo_key(app, key),
    }
}

fn handle_search_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search_input.clear();
            app.set_search(String::new());
            app.overlay = Overlay::None;
        }
        KeyCode::Enter => {
            let search = std::mem::take(&mut app.search_input);
            app.set_search(search);
            app.overlay = Overlay::None;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.set_search(app.search_input.clone());
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.set_search(app.search_input.clone());
        }
        _ => {}
    }
}

fn handle_stocks_key(app: &mut AppState, key: KeyEvent) {
    let n = stockpulse_core::domain::Strategy::ALL.len();
    match key.code {
        KeyCode::Char('c') => app.cycle_sector(),
        KeyCode::Char(']') => app.strategy_cursor = (app.strategy_cursor + 1) % n,
        KeyCode::Char('[') => app.strategy_cursor = (app.strategy_cursor + n - 1) % n,
        KeyCode::Char(' ') => app.toggle_highlighted_strategy(),
        KeyCode::Char('a') => {
            app.set_all_strategies(true);
            app.set_status("All strategies on");
        }
        KeyCode::Char('x') => {
            app.set_all_strategies(false);
            app.set_warning("No strategies selected: nothing will match");
        }
        _ => {}
    }
}

fn handle_ipo_key(app: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Char('o') {
        app.cycle_ipo_status();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::StatusLevel;
    use crate::test_helpers::{ch, dashboard_app, key, onboarding_app};
    use stockpulse_core::domain::{IpoStatus, Sector, Signal};
    use stockpulse_core::query::Selection;

    fn type_str(app: &mut AppState, s: &str) {
        for c in s.chars() {
            handle_key(app, ch(c));
        }
    }

    #[test]
    fn onboarding_happy_path() {
        let mut app = onboarding_app();
        type_str(&mut app, "250000");
        assert_eq!(app.onboarding.wizard.amount_display(), "2,50,000");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.onboarding.wizard.step(), OnboardingStep::HoldingSelect);

        handle_key(&mut app, ch('1'));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.onboarding.wizard.step(), OnboardingStep::Summary);

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.profile.amount, 250_000);
        assert_eq!(app.profile.holding, HoldingPeriod::Intraday);
    }

    #[test]
    fn amount_below_minimum_stays_and_warns() {
        let mut app = onboarding_app();
        type_str(&mut app, "999");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.onboarding.wizard.step(), OnboardingStep::AmountEntry);
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Warning);
        assert!(msg.contains("1,000"));
    }

    #[test]
    fn letters_are_ignored_in_amount() {
        let mut app = onboarding_app();
        type_str(&mut app, "abc");
        assert_eq!(app.onboarding.wizard.amount(), None);
        assert!(app.running);
    }

    #[test]
    fn quick_amounts_cycle() {
        let mut app = onboarding_app();
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.onboarding.wizard.amount(), Some(50_000));
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.onboarding.wizard.amount_display(), "1,00,000");
        handle_key(&mut app, key(KeyCode::BackTab));
        handle_key(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.onboarding.wizard.amount(), Some(10_00_000));
    }

    #[test]
    fn holding_required_then_back() {
        let mut app = onboarding_app();
        type_str(&mut app, "5000");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.onboarding.wizard.step(), OnboardingStep::HoldingSelect);

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.onboarding.wizard.step(), OnboardingStep::AmountEntry);
        assert_eq!(app.onboarding.wizard.amount(), Some(5000));
    }

    #[test]
    fn space_selects_highlighted_holding() {
        let mut app = onboarding_app();
        type_str(&mut app, "5000");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch(' '));
        assert_eq!(app.onboarding.wizard.holding(), Some(HoldingPeriod::Medium));
    }

    #[test]
    fn tab_keys_switch_tabs() {
        let mut app = dashboard_app();
        handle_key(&mut app, ch('2'));
        assert_eq!(app.active_tab, Tab::Fno);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.active_tab, Tab::Ipo);
        handle_key(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.active_tab, Tab::Fno);
    }

    #[test]
    fn search_overlay_filters_live() {
        let mut app = dashboard_app();
        handle_key(&mut app, ch('/'));
        assert_eq!(app.overlay, Overlay::Search);
        type_str(&mut app, "bank");
        assert_eq!(app.filters.search, "bank");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.visible_stocks().len(), 2);

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.filters.search.is_empty());
    }

    #[test]
    fn q_inside_search_is_text() {
        let mut app = dashboard_app();
        handle_key(&mut app, ch('/'));
        handle_key(&mut app, ch('q'));
        assert!(app.running);
        assert_eq!(app.search_input, "q");
    }

    #[test]
    fn filter_keys() {
        let mut app = dashboard_app();
        handle_key(&mut app, ch('s'));
        assert_eq!(app.filters.signal, Selection::Only(Signal::Buy));
        handle_key(&mut app, ch('c'));
        assert_eq!(app.filters.sector, Selection::Only(Sector::It));
        handle_key(&mut app, ch(']'));
        handle_key(&mut app, ch(' '));
        assert!(!app.filters.strategies.contains(app.highlighted_strategy()));
        handle_key(&mut app, ch('x'));
        assert!(app.visible_stocks().is_empty());
        handle_key(&mut app, ch('a'));
        assert!(app.filters.strategies.is_full());

        handle_key(&mut app, ch('3'));
        handle_key(&mut app, ch('o'));
        assert_eq!(app.filters.ipo_status, Selection::Only(IpoStatus::Upcoming));

        handle_key(&mut app, ch('r'));
        assert!(app.filters.is_default());
    }

    #[test]
    fn sector_key_only_on_stocks_tab() {
        let mut app = dashboard_app();
        handle_key(&mut app, ch('2'));
        handle_key(&mut app, ch('c'));
        assert!(app.filters.sector.is_all());
    }

    #[test]
    fn detail_opens_and_closes() {
        let mut app = dashboard_app();
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.overlay, Overlay::Detail(1));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn detail_needs_a_row() {
        let mut app = dashboard_app();
        handle_key(&mut app, ch('x'));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn quit_and_ctrl_c() {
        let mut app = dashboard_app();
        handle_key(&mut app, ch('q'));
        assert!(!app.running);

        let mut app = onboarding_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    // ── Arbitrary key sequences ──

    use proptest::prelude::*;

    fn any_key() -> impl proptest::strategy::Strategy<Value = KeyEvent> {
        prop_oneof![
            prop::sample::select(vec!['j', 'k', 's', 'c', 'o', 'a', 'x', '[', ']', ' ', '/', '?', '1', '2', '3', 'r', 'n', 'i'])
                .prop_map(ch),
            prop::sample::select(vec![
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Backspace,
                KeyCode::Up,
                KeyCode::Down,
            ])
            .prop_map(key),
        ]
    }

    proptest! {
        #[test]
        fn cursors_stay_inside_their_views(keys in prop::collection::vec(any_key(), 0..60)) {
            let mut app = dashboard_app();
            for k in keys {
                handle_key(&mut app, k);
            }
            for tab in Tab::ALL {
                let len = app.visible_len(tab);
                prop_assert!(app.cursors[tab.index()] < len.max(1));
            }
            if let Overlay::Detail(idx) = app.overlay {
                prop_assert!(idx < app.visible_len(app.active_tab));
            }
        }
    }
}
