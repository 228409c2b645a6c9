//! Bottom status bar: key hints and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Overlay, Screen, StatusLevel, Tab};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(hints(app), theme::muted())];

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hints(app: &AppState) -> &'static str {
    match app.screen {
        Screen::Onboarding => " Ctrl+C:Quit",
        Screen::Dashboard => match (app.overlay, app.active_tab) {
            (Overlay::Search, _) => " Type to filter  Enter:Keep  Esc:Clear",
            (Overlay::Help | Overlay::Detail(_), _) => " Esc:Close",
            (Overlay::None, Tab::Stocks) => " 1-3:Tabs /:Search s:Signal c:Sector Space:Model Enter:Detail ?:Help q:Quit",
            (Overlay::None, Tab::Fno) => " 1-3:Tabs /:Search s:Signal Enter:Detail ?:Help q:Quit",
            (Overlay::None, Tab::Ipo) => " 1-3:Tabs /:Search o:Status Enter:Detail ?:Help q:Quit",
        },
    }
}
