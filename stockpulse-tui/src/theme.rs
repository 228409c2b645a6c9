//! Dark market theme for the StockPulse TUI.
//!
//! # Color Palette
//! - **Background**: near-black charcoal
//! - **Accent**: teal (focus, headings, primary numbers)
//! - **Buy**: green (BUY signals, gains, positive GMP)
//! - **Sell**: red (SELL signals, losses, negative GMP)
//! - **Hold**: amber (HOLD signals, warnings)
//! - **Neutral**: soft violet (secondary highlights)
//! - **Muted**: slate (labels, hints, disabled chips)
//!
//! The free functions below return ready-made styles from the default theme
//! so render code can stay terse.

use ratatui::style::{Color, Modifier, Style};

use stockpulse_core::domain::{IpoRating, IpoStatus, Signal};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub buy: Color,
    pub sell: Color,
    pub hold: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::market_dark()
    }
}

impl Theme {
    pub fn market_dark() -> Self {
        Self {
            background: Color::Rgb(15, 17, 21),
            accent: Color::Rgb(45, 212, 191),
            buy: Color::Rgb(34, 197, 94),
            sell: Color::Rgb(239, 68, 68),
            hold: Color::Rgb(245, 158, 11),
            neutral: Color::Rgb(167, 139, 250),
            muted: Color::Rgb(120, 130, 150),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Gains green, losses red. Zero counts as a gain.
    pub fn change_color(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.buy
        } else {
            self.sell
        }
    }

    pub fn signal_color(&self, signal: Signal) -> Color {
        match signal {
            Signal::Buy => self.buy,
            Signal::Sell => self.sell,
            Signal::Hold => self.hold,
        }
    }

    pub fn status_color(&self, status: IpoStatus) -> Color {
        match status {
            IpoStatus::Open => self.buy,
            IpoStatus::Upcoming => self.accent,
            IpoStatus::Listed => self.neutral,
            IpoStatus::Closed => self.muted,
        }
    }

    pub fn rating_color(&self, rating: IpoRating) -> Color {
        match rating {
            IpoRating::Subscribe => self.buy,
            IpoRating::Avoid => self.sell,
            IpoRating::Neutral => self.hold,
        }
    }

    /// Confidence gradient: 90+ buy, 80+ accent, 60+ neutral, else muted.
    pub fn confidence_color(&self, confidence: u8) -> Color {
        match confidence {
            c if c >= 90 => self.buy,
            c if c >= 80 => self.accent,
            c if c >= 60 => self.neutral,
            _ => self.muted,
        }
    }
}

fn theme() -> Theme {
    Theme::default()
}

pub fn accent() -> Style {
    Style::default().fg(theme().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(theme().muted)
}

pub fn neutral() -> Style {
    Style::default().fg(theme().neutral)
}

pub fn text() -> Style {
    Style::default().fg(theme().text_primary)
}

pub fn positive() -> Style {
    Style::default().fg(theme().buy)
}

pub fn negative() -> Style {
    Style::default().fg(theme().sell)
}

pub fn warning() -> Style {
    Style::default().fg(theme().hold)
}

pub fn change(value: f64) -> Style {
    Style::default().fg(theme().change_color(value))
}

pub fn signal(signal: Signal) -> Style {
    Style::default()
        .fg(theme().signal_color(signal))
        .add_modifier(Modifier::BOLD)
}

pub fn ipo_status(status: IpoStatus) -> Style {
    Style::default().fg(theme().status_color(status))
}

pub fn rating(rating: IpoRating) -> Style {
    Style::default().fg(theme().rating_color(rating))
}

pub fn confidence(confidence: u8) -> Style {
    Style::default().fg(theme().confidence_color(confidence))
}

/// Highlighted list row.
pub fn selected() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

/// Active filter chip vs inactive chip.
pub fn chip(active: bool) -> Style {
    if active {
        accent_bold().add_modifier(Modifier::REVERSED)
    } else {
        muted()
    }
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(15, 17, 21));
        assert_eq!(theme.accent, Color::Rgb(45, 212, 191));
    }

    #[test]
    fn change_color() {
        let theme = Theme::default();
        assert_eq!(theme.change_color(1.51), theme.buy);
        assert_eq!(theme.change_color(-2.57), theme.sell);
        assert_eq!(theme.change_color(0.0), theme.buy);
    }

    #[test]
    fn signal_colors() {
        let theme = Theme::default();
        assert_eq!(theme.signal_color(Signal::Buy), theme.buy);
        assert_eq!(theme.signal_color(Signal::Sell), theme.sell);
        assert_eq!(theme.signal_color(Signal::Hold), theme.hold);
    }

    #[test]
    fn confidence_gradient() {
        let theme = Theme::default();
        assert_eq!(theme.confidence_color(95), theme.buy);
        assert_eq!(theme.confidence_color(85), theme.accent);
        assert_eq!(theme.confidence_color(65), theme.neutral);
        assert_eq!(theme.confidence_color(52), theme.muted);
    }

    #[test]
    fn ipo_colors() {
        let theme = Theme::default();
        assert_eq!(theme.status_color(IpoStatus::Open), theme.buy);
        assert_eq!(theme.rating_color(IpoRating::Avoid), theme.sell);
    }

    #[test]
    fn chip_styles_differ() {
        assert_ne!(chip(true), chip(false));
        assert_eq!(panel_border(false), muted());
    }
}
