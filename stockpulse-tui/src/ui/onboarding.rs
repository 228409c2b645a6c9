//! Onboarding card: amount entry, holding period, then the profile summary.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use stockpulse_core::domain::HoldingPeriod;
use stockpulse_core::format::{format_rupees, group_indian};
use stockpulse_core::onboarding::{suggestions, OnboardingStep, QUICK_AMOUNTS};

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let wizard = &app.onboarding.wizard;
    let step = wizard.step();

    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" StockPulse · Step {} of 3 ", step.number()))
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = vec![
        progress_line(step),
        Line::from(""),
        Line::from(Span::styled(step.title(), theme::accent_bold())),
    ];

    match step {
        OnboardingStep::AmountEntry => amount_step(&mut lines, app),
        OnboardingStep::HoldingSelect => holding_step(&mut lines, app),
        OnboardingStep::Summary => summary_step(&mut lines, app),
    }

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

fn progress_line(step: OnboardingStep) -> Line<'static> {
    let mut spans = Vec::new();
    for n in 1..=3u8 {
        let style = if n <= step.number() {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(if n <= step.number() { "━━━━━━" } else { "──────" }, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn amount_step(lines: &mut Vec<Line<'static>>, app: &AppState) {
    let wizard = &app.onboarding.wizard;
    let display = wizard.amount_display();

    lines.push(Line::from(Span::styled(
        "How much would you like to invest?",
        theme::muted(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  ₹ ", theme::accent_bold()),
        Span::styled(display.clone(), theme::text()),
        Span::styled("_", theme::accent()),
    ]));

    if !display.is_empty() && !wizard.amount_is_valid() {
        lines.push(Line::from(Span::styled(
            format!("  Minimum ₹{} required", group_indian(wizard.min_investment())),
            theme::negative(),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    let current = wizard.amount();
    let mut chips = vec![Span::styled("  Quick  ", theme::muted())];
    for amount in QUICK_AMOUNTS {
        chips.push(Span::styled(
            format!(" {} ", format_rupees(amount)),
            theme::chip(current == Some(amount)),
        ));
        chips.push(Span::raw(" "));
    }
    lines.push(Line::from(chips));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [0-9] type  [Tab/←→] quick amount  [Enter] continue  [Esc] quit",
        theme::muted(),
    )));
}

fn holding_step(lines: &mut Vec<Line<'static>>, app: &AppState) {
    let selected = app.onboarding.wizard.holding();
    let cursor = app.onboarding.highlighted_holding();

    lines.push(Line::from(Span::styled(
        "How long do you plan to hold your positions?",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    for (i, holding) in HoldingPeriod::ALL.into_iter().enumerate() {
        let mark = if selected == Some(holding) { "✓" } else { " " };
        let label_style = if holding == cursor {
            theme::selected()
        } else if selected == Some(holding) {
            theme::accent_bold()
        } else {
            theme::text()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", i + 1), theme::muted()),
            Span::styled(format!("[{mark}] "), theme::accent()),
            Span::styled(format!("{:<18}", holding.label()), label_style),
            Span::styled(format!("  {}", holding.description()), theme::muted()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [j/k] move  [Space/1-5] select  [Enter] continue  [Esc] back",
        theme::muted(),
    )));
}

fn summary_step(lines: &mut Vec<Line<'static>>, app: &AppState) {
    let wizard = &app.onboarding.wizard;
    let holding = wizard.holding();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Investment   ", theme::muted()),
        Span::styled(
            wizard.amount().map(format_rupees).unwrap_or_default(),
            theme::accent_bold(),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Holding      ", theme::muted()),
        Span::styled(
            holding.map(HoldingPeriod::label).unwrap_or("-"),
            theme::accent_bold(),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Recommended for you",
        theme::accent_bold(),
    )));
    for tip in suggestions(holding) {
        lines.push(Line::from(vec![
            Span::styled("  • ", theme::accent()),
            Span::styled(tip.title, theme::text()),
            Span::styled(format!("  {}", tip.detail), theme::muted()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [Enter] start dashboard  [Ctrl+C] quit",
        theme::muted(),
    )));
}
