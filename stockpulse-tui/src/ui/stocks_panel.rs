//! Tab 1: Stocks: market stats, filter chips and the alert list.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use stockpulse_core::domain::{Sector, Signal, StockAlert, Strategy};
use stockpulse_core::format::{format_confidence, format_inr, format_signed_pct};
use stockpulse_core::query::Selection;

use crate::app::AppState;
use crate::theme;
use crate::ui::{scroll_offset, truncate};

/// Rows above the alert list.
const HEADER_ROWS: usize = 6;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let stocks = app.visible_stocks();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(stats_line(app));
    lines.push(sector_chips(app.filters.sector));
    lines.push(signal_and_search(app));
    lines.push(strategy_chips(app));
    lines.push(Line::from(""));

    if stocks.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No alerts match your filters.",
            theme::muted(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!(
                "{:<11} {:<22} {:>11} {:>8} {:<5} {:<16} {:>5} {:>11} {:>11} {:>5}",
                "Symbol", "Name", "Price", "Chg", "Sig", "Strategy", "Conf", "Target", "Stop", "Qty"
            ),
            theme::accent_bold(),
        )));

        let height = (area.height as usize).saturating_sub(HEADER_ROWS);
        let cursor = app.cursor();
        let start = scroll_offset(cursor, height);
        for (i, alert) in stocks.iter().enumerate().skip(start).take(height) {
            lines.push(alert_row(alert, i == cursor));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn stats_line(app: &AppState) -> Line<'static> {
    let s = app.summary();
    Line::from(vec![
        Span::styled("Buy Signals ", theme::muted()),
        Span::styled(s.buy_count.to_string(), theme::signal(Signal::Buy)),
        Span::styled("   Sell Signals ", theme::muted()),
        Span::styled(s.sell_count.to_string(), theme::signal(Signal::Sell)),
        Span::styled("   Hold ", theme::muted()),
        Span::styled(s.hold_count.to_string(), theme::signal(Signal::Hold)),
        Span::styled("   Avg Confidence ", theme::muted()),
        Span::styled(format_confidence(s.avg_confidence), theme::accent_bold()),
    ])
}

fn sector_chips(active: Selection<Sector>) -> Line<'static> {
    let mut spans = vec![Span::styled("Sector  ", theme::muted())];
    spans.push(Span::styled(" All ", theme::chip(active.is_all())));
    for sector in Sector::ALL {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} ", sector.label()),
            theme::chip(active == Selection::Only(sector)),
        ));
    }
    spans.push(Span::styled("  [c]", theme::muted()));
    Line::from(spans)
}

/// Signal chips plus the current search, shared by every tab.
pub fn signal_and_search(app: &AppState) -> Line<'static> {
    let active = app.filters.signal;
    let mut spans = vec![Span::styled("Signal  ", theme::muted())];
    spans.push(Span::styled(" ALL ", theme::chip(active.is_all())));
    for signal in Signal::ALL {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} ", signal.code()),
            theme::chip(active == Selection::Only(signal)),
        ));
    }
    spans.push(Span::styled("  [s]   Search ", theme::muted()));
    if app.filters.search.is_empty() {
        spans.push(Span::styled("symbol or name... [/]", theme::muted()));
    } else {
        spans.push(Span::styled(format!("\"{}\"", app.filters.search), theme::accent_bold()));
        spans.push(Span::styled(" [Esc]clear", theme::muted()));
    }
    Line::from(spans)
}

fn strategy_chips(app: &AppState) -> Line<'static> {
    let mut spans = vec![Span::styled("Models  ", theme::muted())];
    let highlighted = app.highlighted_strategy();
    for strategy in Strategy::ALL {
        let on = app.filters.strategies.contains(strategy);
        let mark = if on { "✓" } else { "·" };
        let style = if strategy == highlighted {
            theme::selected()
        } else if on {
            theme::accent()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {mark} {} ", strategy.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!(" {}/{} [ ] move [Space]toggle [a]ll [x]none", app.filters.strategies.len(), Strategy::ALL.len()),
        theme::muted(),
    ));
    Line::from(spans)
}

fn alert_row(alert: &StockAlert, is_cursor: bool) -> Line<'static> {
    let base = if is_cursor { theme::selected() } else { theme::text() };
    let pick = |style| if is_cursor { base } else { style };

    Line::from(vec![
        Span::styled(format!("{:<11} ", truncate(&alert.symbol, 11)), base),
        Span::styled(format!("{:<22} ", truncate(&alert.name, 22)), pick(theme::muted())),
        Span::styled(format!("{:>11} ", format_inr(alert.current_price, 2)), base),
        Span::styled(
            format!("{:>8} ", format_signed_pct(alert.change_percent)),
            pick(theme::change(alert.change_percent)),
        ),
        Span::styled(format!("{:<5} ", alert.signal.code()), pick(theme::signal(alert.signal))),
        Span::styled(format!("{:<16} ", alert.strategy.label()), pick(theme::neutral())),
        Span::styled(
            format!("{:>4}% ", alert.confidence),
            pick(theme::confidence(alert.confidence)),
        ),
        Span::styled(format!("{:>11} ", format_inr(alert.target_price, 2)), pick(theme::positive())),
        Span::styled(format!("{:>11} ", format_inr(alert.stop_loss, 2)), pick(theme::negative())),
        Span::styled(format!("{:>5}", alert.quantity), base),
    ])
}
