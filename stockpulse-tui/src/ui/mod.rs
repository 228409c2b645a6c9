//! Top-level UI layout: onboarding card, or header / corner / tab body with
//! a status bar.

pub mod corner;
pub mod fno_panel;
pub mod header;
pub mod ipo_panel;
pub mod onboarding;
pub mod overlays;
pub mod status_bar;
pub mod stocks_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Screen, Tab};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    match app.screen {
        Screen::Onboarding => onboarding::render(f, main_area, app),
        Screen::Dashboard => draw_dashboard(f, main_area, app),
    }

    status_bar::render(f, status_area, app);

    if app.screen == Screen::Dashboard {
        match app.overlay {
            Overlay::Search => overlays::render_search(f, main_area, &app.search_input),
            Overlay::Help => overlays::render_help(f, main_area),
            Overlay::Detail(idx) => overlays::render_detail(f, main_area, app, idx),
            Overlay::None => {}
        }
    }
}

fn draw_dashboard(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(corner::HEIGHT),
            Constraint::Min(5),
        ])
        .split(area);

    header::render(f, chunks[0], app);
    corner::render(f, chunks[1], app);
    draw_tab(f, chunks[2], app);
}

/// Draw the active tab with its border.
fn draw_tab(f: &mut Frame, area: Rect, app: &AppState) {
    let tab = app.active_tab;
    let count = app.visible_len(tab);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] · {count} shown ", tab.label(), tab.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match tab {
        Tab::Stocks => stocks_panel::render(f, inner, app),
        Tab::Fno => fno_panel::render(f, inner, app),
        Tab::Ipo => ipo_panel::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Cut `s` to `max` characters, marking the cut with a trailing `.`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{head}.")
    }
}

/// First row index to draw so that `cursor` stays inside `height` rows.
pub fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        0
    } else {
        cursor.saturating_sub(height - 1)
    }
}
