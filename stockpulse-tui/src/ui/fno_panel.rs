//! Tab 2: F&O: contracts with OI, IV and lot recommendations.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use stockpulse_core::domain::FnOContract;
use stockpulse_core::format::{format_inr, format_signed_pct, group_indian};

use crate::app::AppState;
use crate::theme;
use crate::ui::stocks_panel::signal_and_search;
use crate::ui::{scroll_offset, truncate};

const HEADER_ROWS: usize = 4;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let contracts = app.visible_contracts();
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Futures & Options · signals with OI analysis, IV tracking and lot sizing",
            theme::muted(),
        )),
        signal_and_search(app),
        Line::from(""),
    ];

    if contracts.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No F&O contracts match your filters.",
            theme::muted(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!(
                "{:<10} {:<6} {:>10} {:<7} {:>10} {:>8} {:>7} {:>7} {:>6} {:<5} {:>12} {:>5}",
                "Symbol", "Type", "Strike", "Expiry", "LTP", "Chg", "OI", "OI Chg", "IV", "Sig", "Qty", "Conf"
            ),
            theme::accent_bold(),
        )));

        let height = (area.height as usize).saturating_sub(HEADER_ROWS);
        let cursor = app.cursor();
        let start = scroll_offset(cursor, height);
        for (i, contract) in contracts.iter().enumerate().skip(start).take(height) {
            lines.push(contract_row(contract, i == cursor));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// `2 × 25 = 50`
pub fn quantity_label(c: &FnOContract) -> String {
    format!("{} × {} = {}", c.lots, c.lot_size, group_indian(c.total_quantity()))
}

fn contract_row(c: &FnOContract, is_cursor: bool) -> Line<'static> {
    let base = if is_cursor { theme::selected() } else { theme::text() };
    let pick = |style| if is_cursor { base } else { style };

    let strike = c
        .strike()
        .map(|s| format_inr(s, 0))
        .unwrap_or_else(|| "-".to_string());
    let iv = c
        .implied_volatility()
        .map(|v| format!("{v:.1}%"))
        .unwrap_or_else(|| "-".to_string());
    let oi_style = if c.oi_building() {
        theme::positive()
    } else {
        theme::negative()
    };

    Line::from(vec![
        Span::styled(format!("{:<10} ", truncate(&c.symbol, 10)), base),
        Span::styled(format!("{:<6} ", c.contract_type.code()), pick(theme::neutral())),
        Span::styled(format!("{strike:>10} "), base),
        Span::styled(format!("{:<7} ", truncate(&c.expiry, 7)), pick(theme::muted())),
        Span::styled(format!("{:>10} ", format_inr(c.ltp, 2)), base),
        Span::styled(
            format!("{:>8} ", format_signed_pct(c.change_percent)),
            pick(theme::change(c.change_percent)),
        ),
        Span::styled(format!("{:>7} ", c.oi), pick(theme::muted())),
        Span::styled(format!("{:>7} ", c.oi_change), pick(oi_style)),
        Span::styled(format!("{iv:>6} "), pick(theme::warning())),
        Span::styled(format!("{:<5} ", c.signal.code()), pick(theme::signal(c.signal))),
        Span::styled(format!("{:>12} ", quantity_label(c)), base),
        Span::styled(format!("{:>4}%", c.confidence), pick(theme::confidence(c.confidence))),
    ])
}
