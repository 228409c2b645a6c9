//! Onboarding wizard: capital amount, holding period, summary.
//!
//! ```text
//! AmountEntry ──advance──▶ HoldingSelect ──advance──▶ Summary ──complete──▶ done
//!      ▲                        │
//!      └────────── back ────────┘
//! ```
//!
//! Guard failures are returned as [`OnboardingError`] and leave the wizard
//! unchanged. Completion fires at most once per wizard.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MIN_INVESTMENT;
use crate::domain::HoldingPeriod;
use crate::error::OnboardingError;
use crate::format::group_digits;

/// Largest number of digits the amount field keeps.
pub const MAX_AMOUNT_DIGITS: usize = 15;

/// Preset capital amounts offered on the first step.
pub const QUICK_AMOUNTS: [u64; 5] = [50_000, 1_00_000, 2_50_000, 5_00_000, 10_00_000];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardingStep {
    AmountEntry,
    HoldingSelect,
    Summary,
}

impl OnboardingStep {
    /// 1-based position in the wizard.
    pub fn number(self) -> u8 {
        match self {
            OnboardingStep::AmountEntry => 1,
            OnboardingStep::HoldingSelect => 2,
            OnboardingStep::Summary => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            OnboardingStep::AmountEntry => "Investment Amount",
            OnboardingStep::HoldingSelect => "Holding Period",
            OnboardingStep::Summary => "Your Profile",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Keep only ASCII digits, drop leading zeros and cap the length.
///
/// Every other character is discarded, so `"1.000"` becomes `"1000"`.
pub fn normalize_amount_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .skip_while(|c| *c == '0')
        .take(MAX_AMOUNT_DIGITS)
        .collect()
}

/// Parse an amount as displayed, with grouping separators.
///
/// Returns `None` for empty or non-numeric text.
pub fn parse_amount(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| *c != ',').collect();
    let digits = digits.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Payload handed to the application shell when the wizard finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingCompletion {
    pub amount: u64,
    pub holding: HoldingPeriod,
}

/// The investor's capital and horizon as used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub amount: u64,
    pub holding: HoldingPeriod,
}

impl Default for InvestorProfile {
    fn default() -> Self {
        Self {
            amount: 1_00_000,
            holding: HoldingPeriod::default(),
        }
    }
}

impl From<OnboardingCompletion> for InvestorProfile {
    fn from(c: OnboardingCompletion) -> Self {
        Self {
            amount: c.amount,
            holding: c.holding,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Tips shown on the summary step. The last one depends on the horizon.
pub fn suggestions(holding: Option<HoldingPeriod>) -> [Suggestion; 4] {
    let last = if holding == Some(HoldingPeriod::Intraday) {
        Suggestion {
            title: "Focus on F&O",
            detail: "For intraday, F&O gives better leverage with defined risk.",
        }
    } else {
        Suggestion {
            title: "Start with large caps",
            detail: "Blue-chip stocks like Reliance, TCS give stable returns for your timeframe.",
        }
    };
    [
        Suggestion {
            title: "Diversify across sectors",
            detail: "Spread your capital across IT, Banking, Auto & Pharma to reduce risk.",
        },
        Suggestion {
            title: "Use stop-loss strictly",
            detail: "Never risk more than 2% of your capital on a single trade.",
        },
        Suggestion {
            title: "Follow ADX+ATR+VWAP",
            detail: "Our flagship strategy combines trend strength, volatility and volume.",
        },
        last,
    ]
}

/// Wizard state. Starts at [`OnboardingStep::AmountEntry`] with an empty
/// amount and no holding period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Onboarding {
    step: OnboardingStep,
    digits: String,
    holding: Option<HoldingPeriod>,
    min_investment: u64,
    completed: bool,
}

impl Default for Onboarding {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INVESTMENT)
    }
}

impl Onboarding {
    pub fn new(min_investment: u64) -> Self {
        Self {
            step: OnboardingStep::AmountEntry,
            digits: String::new(),
            holding: None,
            min_investment,
            completed: false,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn holding(&self) -> Option<HoldingPeriod> {
        self.holding
    }

    pub fn min_investment(&self) -> u64 {
        self.min_investment
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Amount text with Indian grouping, e.g. `1,00,000`. Empty when unset.
    pub fn amount_display(&self) -> String {
        group_digits(&self.digits)
    }

    pub fn amount(&self) -> Option<u64> {
        parse_amount(&self.digits)
    }

    /// True when the current amount satisfies the minimum.
    pub fn amount_is_valid(&self) -> bool {
        self.check_amount().is_ok()
    }

    /// Replace the amount with freshly typed or pasted text.
    pub fn set_amount_text(&mut self, raw: &str) {
        self.digits = normalize_amount_input(raw);
    }

    pub fn set_amount(&mut self, amount: u64) {
        self.set_amount_text(&amount.to_string());
    }

    /// Append one typed character. Non-digits are ignored.
    pub fn push_char(&mut self, c: char) {
        let mut raw = std::mem::take(&mut self.digits);
        raw.push(c);
        self.digits = normalize_amount_input(&raw);
    }

    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    /// Choose a holding period. Only meaningful on the holding step, but
    /// harmless elsewhere.
    pub fn select_holding(&mut self, holding: HoldingPeriod) {
        self.holding = Some(holding);
    }

    fn check_amount(&self) -> Result<u64, OnboardingError> {
        let amount = self.amount().ok_or(OnboardingError::AmountMissing)?;
        if amount < self.min_investment {
            return Err(OnboardingError::AmountBelowMinimum {
                amount,
                minimum: self.min_investment,
            });
        }
        Ok(amount)
    }

    /// Move forward one step if the current step's guard holds.
    pub fn advance(&mut self) -> Result<OnboardingStep, OnboardingError> {
        if self.completed {
            return Err(OnboardingError::AlreadyCompleted);
        }
        let next = match self.step {
            OnboardingStep::AmountEntry => {
                self.check_amount()?;
                OnboardingStep::HoldingSelect
            }
            OnboardingStep::HoldingSelect => {
                self.holding.ok_or(OnboardingError::HoldingNotSelected)?;
                OnboardingStep::Summary
            }
            OnboardingStep::Summary => {
                return Err(OnboardingError::WrongStep {
                    expected: "holding period",
                })
            }
        };
        tracing::debug!(from = %self.step, to = %next, "onboarding advanced");
        self.step = next;
        Ok(next)
    }

    /// Return from the holding step to the amount step. Returns false (and
    /// does nothing) from any other step.
    pub fn back(&mut self) -> bool {
        if self.completed || self.step != OnboardingStep::HoldingSelect {
            return false;
        }
        self.step = OnboardingStep::AmountEntry;
        true
    }

    /// Finish the wizard from the summary step. Succeeds at most once.
    pub fn complete(&mut self) -> Result<OnboardingCompletion, OnboardingError> {
        if self.completed {
            return Err(OnboardingError::AlreadyCompleted);
        }
        if self.step != OnboardingStep::Summary {
            return Err(OnboardingError::WrongStep {
                expected: "summary",
            });
        }
        let amount = self.check_amount()?;
        let holding = self.holding.ok_or(OnboardingError::HoldingNotSelected)?;
        self.completed = true;
        tracing::info!(amount, holding = %holding, "onboarding completed");
        Ok(OnboardingCompletion { amount, holding })
    }
}
