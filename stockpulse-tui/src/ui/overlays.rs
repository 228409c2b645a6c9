//! Overlay widgets: search prompt, keyboard help, row detail.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use stockpulse_core::domain::{FnOContract, IpoListing, StockAlert};
use stockpulse_core::format::{format_gmp, format_inr, format_probability, format_signed_pct};

use crate::app::{AppState, Tab};
use crate::theme;
use crate::ui::centered_rect;
use crate::ui::fno_panel::quantity_label;

/// Live search prompt. The filter is applied as the user types.
pub fn render_search(f: &mut Frame, area: Rect, input: &str) {
    let popup = centered_rect(50, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Search [Enter]keep [Esc]clear ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Symbol, name or company:", theme::muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(input, theme::accent_bold()),
            Span::styled("_", theme::accent()),
        ]),
    ];

    f.render_widget(Paragraph::new(text), inner);
}

/// Keyboard reference.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 85, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keyboard [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global");
    key(&mut lines, "1-3", "Switch to tab by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle tabs forward / back");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "Enter", "Open detail for the highlighted row");
    key(&mut lines, "/", "Search (shared by every tab)");
    key(&mut lines, "Esc", "Clear search");
    key(&mut lines, "s", "Cycle signal filter (ALL → BUY → SELL → HOLD)");
    key(&mut lines, "r", "Reset all filters");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Tab 1 · Stocks");
    key(&mut lines, "c", "Cycle sector filter");
    key(&mut lines, "[ / ]", "Move between strategy chips");
    key(&mut lines, "Space", "Toggle highlighted strategy");
    key(&mut lines, "a / x", "Enable all / no strategies");
    lines.push(Line::from(""));

    section(&mut lines, "Tab 3 · IPO");
    key(&mut lines, "o", "Cycle status filter");

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

/// Detail card for row `idx` of the active tab's visible list.
pub fn render_detail(f: &mut Frame, area: Rect, app: &AppState, idx: usize) {
    let popup = centered_rect(70, 75, area);
    f.render_widget(Clear, popup);

    let (title, lines) = match app.active_tab {
        Tab::Stocks => match app.visible_stocks().get(idx) {
            Some(alert) => (format!(" {} ", alert.symbol), stock_detail(alert)),
            None => missing(),
        },
        Tab::Fno => match app.visible_contracts().get(idx) {
            Some(c) => (format!(" {} {} ", c.symbol, c.contract_type.code()), contract_detail(c)),
            None => missing(),
        },
        Tab::Ipo => match app.visible_ipos().get(idx) {
            Some(ipo) => (format!(" {} ", ipo.company), ipo_detail(ipo)),
            None => missing(),
        },
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!("{title}[Esc]close "))
        .title_style(theme::accent_bold());

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

fn missing() -> (String, Vec<Line<'static>>) {
    (
        " Detail ".to_string(),
        vec![Line::from(Span::styled("Row no longer visible.", theme::muted()))],
    )
}

fn stock_detail(a: &StockAlert) -> Vec<Line<'static>> {
    let an = &a.analysis;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(a.name.clone(), theme::accent_bold()),
            Span::styled(
                format!("  {} · {}", a.exchange.code(), a.sector.label()),
                theme::muted(),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(a.signal.code(), theme::signal(a.signal)),
            Span::styled(
                format!("  {} · {}% confidence", a.strategy.label(), a.confidence),
                theme::muted(),
            ),
        ]),
        Line::from(Span::styled(a.reason.clone(), theme::text())),
        Line::from(""),
    ];

    section(&mut lines, "Trade");
    field(&mut lines, "Price", format!(
        "{} ({})",
        format_inr(a.current_price, 2),
        format_signed_pct(a.change_percent)
    ));
    field(&mut lines, "Target", format!(
        "{} ({})",
        format_inr(a.target_price, 2),
        format_signed_pct(a.upside_pct())
    ));
    field(&mut lines, "Stop loss", format_inr(a.stop_loss, 2));
    field(&mut lines, "Quantity", format!(
        "{} shares · {}",
        a.quantity,
        format_inr(a.position_value(), 0)
    ));
    field(&mut lines, "RSI / Volume", format!("{:.1} / {}", a.rsi, a.volume));
    field(&mut lines, "Expected", format!("{:+.2}% daily", a.expected_return));
    field(&mut lines, "As of", a.timestamp.clone());
    lines.push(Line::from(""));

    section(&mut lines, "Analysis");
    field(&mut lines, "Bias", an.bias().label().to_string());
    field(&mut lines, "IQR Z-score", format!("{:.2}", an.iqr_z_score));
    field(&mut lines, "Weighted", format!("{:+.2}", an.weighted_signal));
    field(&mut lines, "ML ensemble", format_probability(an.ml_confidence));
    field(&mut lines, "Neural net", format!(
        "{} (long > {}, short < {})",
        format_probability(an.nn_probability),
        format_probability(an.long_threshold),
        format_probability(an.short_threshold)
    ));
    field(&mut lines, "Sharpe / Calmar", format!("{:.2} / {:.2}", an.sharpe_ratio, an.calmar_ratio));
    field(&mut lines, "Drawdown", format!("{:.1}%", an.max_drawdown));
    field(&mut lines, "Annual return", format!("{:.1}%", an.annual_return));
    lines
}

fn contract_detail(c: &FnOContract) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(c.name.clone(), theme::accent_bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled(c.signal.code(), theme::signal(c.signal)),
            Span::styled(format!("  {}% confidence", c.confidence), theme::muted()),
        ]),
        Line::from(Span::styled(c.reason.clone(), theme::text())),
        Line::from(""),
    ];

    section(&mut lines, "Contract");
    field(&mut lines, "Expiry", c.expiry.clone());
    if let Some(strike) = c.strike() {
        field(&mut lines, "Strike", format_inr(strike, 0));
    }
    field(&mut lines, "LTP", format!(
        "{} ({})",
        format_inr(c.ltp, 2),
        format_signed_pct(c.change_percent)
    ));
    field(&mut lines, "Open interest", format!("{} ({})", c.oi, c.oi_change));
    field(&mut lines, "Volume", c.volume.clone());
    if let Some(iv) = c.implied_volatility() {
        field(&mut lines, "IV", format!("{iv:.1}%"));
    }
    field(&mut lines, "Quantity", quantity_label(c));
    lines
}

fn ipo_detail(ipo: &IpoListing) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(ipo.symbol.clone(), theme::accent_bold()),
            Span::styled(
                format!("  {} · {}", ipo.board.code(), ipo.sector),
                theme::muted(),
            ),
        ]),
        Line::from(vec![
            Span::styled(ipo.status.label(), theme::ipo_status(ipo.status)),
            Span::styled("  ", theme::muted()),
            Span::styled(ipo.rating.label(), theme::rating(ipo.rating)),
        ]),
        Line::from(""),
    ];

    section(&mut lines, "Issue");
    field(&mut lines, "Price band", ipo.price_range.clone());
    field(&mut lines, "Issue size", ipo.issue_size.clone());
    field(&mut lines, "Lot size", format!("{} shares", ipo.lot_size));
    field(&mut lines, "Opens", ipo.open_date.clone());
    field(&mut lines, "Closes", ipo.close_date.clone());
    field(&mut lines, "Listing", ipo.listing_date.clone());
    field(&mut lines, "GMP", format_gmp(ipo.gmp));
    field(
        &mut lines,
        "Subscription",
        ipo.subscription.clone().unwrap_or_else(|| "not yet open".to_string()),
    );
    lines
}

fn section(lines: &mut Vec<Line<'static>>, title: &'static str) {
    lines.push(Line::from(Span::styled(title, theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'static>>, keys: &'static str, desc: &'static str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc, theme::muted()),
    ]));
}

fn field(lines: &mut Vec<Line<'static>>, name: &'static str, value: String) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<16}", name), theme::muted()),
        Span::styled(value, theme::text()),
    ]));
}
