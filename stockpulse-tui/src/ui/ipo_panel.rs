//! Tab 3: IPO: status chips and listings with GMP, subscription and rating.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use stockpulse_core::domain::{IpoListing, IpoStatus};
use stockpulse_core::format::format_gmp;
use stockpulse_core::query::Selection;

use crate::app::AppState;
use crate::theme;
use crate::ui::{scroll_offset, truncate};

const HEADER_ROWS: usize = 5;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let ipos = app.visible_ipos();
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "IPO Dashboard · upcoming, open and listed issues with GMP and ratings",
            theme::muted(),
        )),
        status_chips(app.filters.ipo_status),
        search_line(app),
        Line::from(""),
    ];

    if ipos.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No IPOs match your search.",
            theme::muted(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!(
                "{:<10} {:<26} {:<9} {:<9} {:>13} {:>10} {:>4} {:<12} {:>6} {:>7} {:<9}",
                "Symbol", "Company", "Status", "Board", "Price Band", "Issue", "Lot", "Dates", "GMP", "Subs", "Rating"
            ),
            theme::accent_bold(),
        )));

        let height = (area.height as usize).saturating_sub(HEADER_ROWS);
        let cursor = app.cursor();
        let start = scroll_offset(cursor, height);
        for (i, ipo) in ipos.iter().enumerate().skip(start).take(height) {
            lines.push(ipo_row(ipo, i == cursor));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn status_chips(active: Selection<IpoStatus>) -> Line<'static> {
    let mut spans = vec![Span::styled("Status  ", theme::muted())];
    spans.push(Span::styled(" All IPOs ", theme::chip(active.is_all())));
    for status in IpoStatus::ALL {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} ", status.label()),
            theme::chip(active == Selection::Only(status)),
        ));
    }
    spans.push(Span::styled("  [o]", theme::muted()));
    Line::from(spans)
}

fn search_line(app: &AppState) -> Line<'static> {
    let mut spans = vec![Span::styled("Search  ", theme::muted())];
    if app.filters.search.is_empty() {
        spans.push(Span::styled("company or symbol... [/]", theme::muted()));
    } else {
        spans.push(Span::styled(format!("\"{}\"", app.filters.search), theme::accent_bold()));
        spans.push(Span::styled(" [Esc]clear", theme::muted()));
    }
    Line::from(spans)
}

fn ipo_row(ipo: &IpoListing, is_cursor: bool) -> Line<'static> {
    let base = if is_cursor { theme::selected() } else { theme::text() };
    let pick = |style| if is_cursor { base } else { style };
    let gmp_style = if ipo.gmp >= 0 {
        theme::positive()
    } else {
        theme::negative()
    };
    let subscription = ipo.subscription.as_deref().unwrap_or("-");

    Line::from(vec![
        Span::styled(format!("{:<10} ", truncate(&ipo.symbol, 10)), base),
        Span::styled(format!("{:<26} ", truncate(&ipo.company, 26)), pick(theme::muted())),
        Span::styled(format!("{:<9} ", ipo.status.label()), pick(theme::ipo_status(ipo.status))),
        Span::styled(format!("{:<9} ", ipo.board.code()), pick(theme::neutral())),
        Span::styled(format!("{:>13} ", truncate(&ipo.price_range, 13)), base),
        Span::styled(format!("{:>10} ", ipo.issue_size), pick(theme::muted())),
        Span::styled(format!("{:>4} ", ipo.lot_size), base),
        Span::styled(
            format!("{:<12} ", truncate(&format!("{} → {}", short_date(&ipo.open_date), short_date(&ipo.close_date)), 12)),
            pick(theme::muted()),
        ),
        Span::styled(format!("{:>6} ", format_gmp(ipo.gmp)), pick(gmp_style)),
        Span::styled(format!("{subscription:>7} "), pick(theme::accent())),
        Span::styled(format!("{:<9}", ipo.rating.label()), pick(theme::rating(ipo.rating))),
    ])
}

/// `"12 Feb 2026"` → `"12 Feb"`.
fn short_date(date: &str) -> &str {
    match date.rfind(' ') {
        Some(i) if date.matches(' ').count() == 2 => &date[..i],
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_date_drops_year() {
        assert_eq!(short_date("12 Feb 2026"), "12 Feb");
        assert_eq!(short_date("TBA"), "TBA");
    }
}
