//! IPO listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::parse_code;
use crate::error::ParseEnumError;

/// Where an offering is in its timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IpoStatus {
    Upcoming,
    Open,
    Listed,
    Closed,
}

impl IpoStatus {
    pub const ALL: [IpoStatus; 4] = [
        IpoStatus::Upcoming,
        IpoStatus::Open,
        IpoStatus::Listed,
        IpoStatus::Closed,
    ];

    pub fn code(self) -> &'static str {
        match self {
            IpoStatus::Upcoming => "UPCOMING",
            IpoStatus::Open => "OPEN",
            IpoStatus::Listed => "LISTED",
            IpoStatus::Closed => "CLOSED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IpoStatus::Upcoming => "Upcoming",
            IpoStatus::Open => "Open",
            IpoStatus::Listed => "Listed",
            IpoStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for IpoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for IpoStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s, &IpoStatus::ALL, |v| v.code(), "IPO status")
    }
}

/// Advisory rating, independent of status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IpoRating {
    Subscribe,
    Avoid,
    Neutral,
}

impl IpoRating {
    pub fn label(self) -> &'static str {
        match self {
            IpoRating::Subscribe => "Subscribe",
            IpoRating::Avoid => "Avoid",
            IpoRating::Neutral => "Neutral",
        }
    }
}

/// Exchange board the issue is listed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardType {
    Mainboard,
    Sme,
}

impl BoardType {
    pub fn code(self) -> &'static str {
        match self {
            BoardType::Mainboard => "MAINBOARD",
            BoardType::Sme => "SME",
        }
    }
}

/// An equity offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpoListing {
    pub id: String,
    pub company: String,
    pub symbol: String,
    /// Display string such as "₹674 - ₹708".
    pub price_range: String,
    pub issue_size: String,
    pub lot_size: u32,
    pub open_date: String,
    pub close_date: String,
    pub listing_date: String,
    pub status: IpoStatus,
    /// Grey-market premium in rupees.
    pub gmp: i32,
    /// Times subscribed ("26.5x"); `None` until data is available.
    #[serde(
        default,
        serialize_with = "serialize_subscription",
        deserialize_with = "deserialize_subscription"
    )]
    pub subscription: Option<String>,
    pub rating: IpoRating,
    /// Free-text industry ("IT Services").
    pub sector: String,
    #[serde(rename = "type")]
    pub board: BoardType,
}

impl IpoListing {
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.company.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}

/// Sentinel used by feeds for "not yet available".
const UNAVAILABLE: &str = "-";

fn serialize_subscription<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(value.as_deref().unwrap_or(UNAVAILABLE))
}

fn deserialize_subscription<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    Ok(raw.filter(|s| {
        let trimmed = s.trim();
        !trimmed.is_empty() && trimmed != UNAVAILABLE
    }))
}
