//! Header: brand, tab chips and the investor profile.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use stockpulse_core::format::format_rupees;

use crate::app::{AppState, Tab};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut tabs: Vec<Span> = vec![
        Span::styled(" StockPulse ", theme::accent_bold()),
        Span::styled("NSE • BSE  ", theme::muted()),
    ];
    for tab in Tab::ALL {
        tabs.push(Span::styled(
            format!(" {}:{} ", tab.index() + 1, tab.label()),
            theme::chip(tab == app.active_tab),
        ));
        tabs.push(Span::raw(" "));
    }

    let profile = Line::from(vec![
        Span::styled(" Capital ", theme::muted()),
        Span::styled(format_rupees(app.profile.amount), theme::text()),
        Span::styled("  Horizon ", theme::muted()),
        Span::styled(app.profile.holding.label(), theme::text()),
        Span::styled("  Data ", theme::muted()),
        Span::styled(app.snapshot.source(), theme::neutral()),
        Span::styled(
            format!("  since {}", app.started_at.format("%H:%M")),
            theme::muted(),
        ),
    ]);

    let para = Paragraph::new(vec![Line::from(tabs), profile]);
    f.render_widget(para, area);
}
