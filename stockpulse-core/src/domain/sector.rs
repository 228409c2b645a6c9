//! Equity sectors and listing exchanges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parse_code;
use crate::error::ParseEnumError;

/// Industry classification of an equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sector {
    It,
    Banking,
    Auto,
    Pharma,
    Energy,
    Fmcg,
    Metals,
    Infra,
}

impl Sector {
    pub const ALL: [Sector; 8] = [
        Sector::It,
        Sector::Banking,
        Sector::Auto,
        Sector::Pharma,
        Sector::Energy,
        Sector::Fmcg,
        Sector::Metals,
        Sector::Infra,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Sector::It => "IT",
            Sector::Banking => "BANKING",
            Sector::Auto => "AUTO",
            Sector::Pharma => "PHARMA",
            Sector::Energy => "ENERGY",
            Sector::Fmcg => "FMCG",
            Sector::Metals => "METALS",
            Sector::Infra => "INFRA",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sector::It => "IT & Tech",
            Sector::Banking => "Banking & Finance",
            Sector::Auto => "Automobile",
            Sector::Pharma => "Pharma & Health",
            Sector::Energy => "Energy & Power",
            Sector::Fmcg => "FMCG",
            Sector::Metals => "Metals & Mining",
            Sector::Infra => "Infrastructure",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Sector {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s, &Sector::ALL, |v| v.code(), "sector")
    }
}

/// Exchange an equity is listed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Exchange {
    Nse,
    Bse,
}

impl Exchange {
    pub fn code(self) -> &'static str {
        match self {
            Exchange::Nse => "NSE",
            Exchange::Bse => "BSE",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sector_round_trips_through_its_code() {
        for sector in Sector::ALL {
            assert_eq!(sector.code().parse::<Sector>().unwrap(), sector);
        }
    }

    #[test]
    fn fmcg_serializes_as_single_token() {
        assert_eq!(serde_json::to_string(&Sector::Fmcg).unwrap(), "\"FMCG\"");
        assert_eq!(serde_json::to_string(&Sector::It).unwrap(), "\"IT\"");
    }

    #[test]
    fn unknown_sector_is_rejected() {
        let err = "TELECOM".parse::<Sector>().unwrap_err();
        assert!(err.to_string().contains("TELECOM"));
    }
}
