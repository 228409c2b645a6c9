//! Investment horizon chosen during onboarding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parse_code;
use crate::error::ParseEnumError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoldingPeriod {
    Intraday,
    Swing,
    #[default]
    Short,
    Medium,
    Long,
}

impl HoldingPeriod {
    pub const ALL: [HoldingPeriod; 5] = [
        HoldingPeriod::Intraday,
        HoldingPeriod::Swing,
        HoldingPeriod::Short,
        HoldingPeriod::Medium,
        HoldingPeriod::Long,
    ];

    /// Stable lowercase key ("intraday", "swing", ...).
    pub fn key(self) -> &'static str {
        match self {
            HoldingPeriod::Intraday => "intraday",
            HoldingPeriod::Swing => "swing",
            HoldingPeriod::Short => "short",
            HoldingPeriod::Medium => "medium",
            HoldingPeriod::Long => "long",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HoldingPeriod::Intraday => "Intraday",
            HoldingPeriod::Swing => "Swing (1-2 weeks)",
            HoldingPeriod::Short => "1-3 Months",
            HoldingPeriod::Medium => "3-12 Months",
            HoldingPeriod::Long => "1+ Year",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HoldingPeriod::Intraday => "Same day trades",
            HoldingPeriod::Swing => "Short-term momentum",
            HoldingPeriod::Short => "Positional trades",
            HoldingPeriod::Medium => "Medium-term growth",
            HoldingPeriod::Long => "Long-term wealth",
        }
    }
}

impl fmt::Display for HoldingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for HoldingPeriod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s, &HoldingPeriod::ALL, |v| v.key(), "holding period")
    }
}
