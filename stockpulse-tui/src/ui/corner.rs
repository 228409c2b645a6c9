//! Strategy corner: pipeline stages, headline metrics and the combined signal.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use stockpulse_core::corner::{combined_signal, headline_analysis, transaction_cost, PIPELINE};
use stockpulse_core::format::{format_inr, format_probability};

use crate::app::AppState;
use crate::theme;

/// Rows the corner occupies, borders included.
pub const HEIGHT: u16 = 4;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let a = headline_analysis();
    let signal = combined_signal(&a);
    let cost = transaction_cost(app.profile.amount, app.config.round_trip_cost());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(format!(
            " Strategy Corner · {} approaches · {}% ann. return ",
            PIPELINE.len(),
            a.annual_return
        ))
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut pipeline: Vec<Span> = Vec::new();
    for (i, stage) in PIPELINE.iter().enumerate() {
        if i > 0 {
            pipeline.push(Span::styled(" → ", theme::muted()));
        }
        pipeline.push(Span::styled(stage.heading(), theme::accent()));
        pipeline.push(Span::styled(format!(" ({})", stage.caption), theme::muted()));
    }

    let z_style = if a.iqr_z_score < 0.0 {
        theme::positive()
    } else {
        theme::negative()
    };
    let metrics = Line::from(vec![
        Span::styled("IQR Z ", theme::muted()),
        Span::styled(format!("{:.1}", a.iqr_z_score), z_style),
        Span::styled("  NN ", theme::muted()),
        Span::styled(format_probability(a.nn_probability), theme::accent()),
        Span::styled("  ML ", theme::muted()),
        Span::styled(format_probability(a.ml_confidence), theme::accent()),
        Span::styled("  Weighted ", theme::muted()),
        Span::styled(format!("{:+.2}", a.weighted_signal), theme::accent()),
        Span::styled("  Sharpe ", theme::muted()),
        Span::styled(format!("{:.1}", a.sharpe_ratio), theme::accent_bold()),
        Span::styled(
            format!("  Calmar {} DD {}%", a.calmar_ratio, a.max_drawdown),
            theme::muted(),
        ),
        Span::styled("  Hybrid ", theme::muted()),
        Span::styled(signal.code(), theme::signal(signal)),
        Span::styled(
            format!("  T-Cost {} ({}bps/side)", format_inr(cost, 0), app.config.cost_per_side_bps),
            theme::muted(),
        ),
    ]);

    let para = Paragraph::new(vec![Line::from(pipeline), metrics]);
    f.render_widget(para, inner);
}
