//! Dashboard configuration loaded from TOML.
//!
//! ```toml
//! min_investment = 1000
//! cost_per_side_bps = 2.0
//! fixtures = "path/to/fixtures.json"
//! ```
//!
//! Every key is optional. A relative `fixtures` path is resolved against the
//! directory holding the config file, not the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest capital the onboarding wizard accepts, in rupees.
pub const DEFAULT_MIN_INVESTMENT: u64 = 1000;

/// Brokerage plus slippage per side, in basis points.
pub const DEFAULT_COST_PER_SIDE_BPS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub min_investment: u64,
    pub cost_per_side_bps: f64,
    /// JSON fixture set to load instead of the built-in fixtures.
    pub fixtures: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            min_investment: DEFAULT_MIN_INVESTMENT,
            cost_per_side_bps: DEFAULT_COST_PER_SIDE_BPS,
            fixtures: None,
        }
    }
}

impl DashboardConfig {
    /// Load and validate a config file.
    ///
    /// A relative `fixtures` entry is joined onto the config file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        if let (Some(fixtures), Some(dir)) = (config.fixtures.as_mut(), path.parent()) {
            if fixtures.is_relative() {
                *fixtures = dir.join(&*fixtures);
            }
        }
        tracing::debug!(path = %path.display(), ?config, "loaded dashboard config");
        Ok(config)
    }

    /// Like [`DashboardConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_investment == 0 {
            return Err(ConfigError::Invalid(
                "min_investment must be at least 1".into(),
            ));
        }
        if !self.cost_per_side_bps.is_finite() || self.cost_per_side_bps < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cost_per_side_bps must be a non-negative number, got {}",
                self.cost_per_side_bps
            )));
        }
        Ok(())
    }

    /// Round-trip cost as a fraction of capital (2 bps per side → 0.0004).
    pub fn round_trip_cost(&self) -> f64 {
        self.cost_per_side_bps * 2.0 / 10_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_file_gives_defaults() {
        let file = write_config("");
        assert_eq!(DashboardConfig::load(file.path()).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let file = write_config(
            "min_investment = 5000\ncost_per_side_bps = 3.5\nfixtures = \"data/set.json\"\n",
        );
        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.min_investment, 5000);
        assert_eq!(config.cost_per_side_bps, 3.5);
        let dir = file.path().parent().unwrap();
        assert_eq!(config.fixtures, Some(dir.join("data/set.json")));
    }

    #[test]
    fn fixtures_path_follows_config_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "fixtures = \"market.json\"\n").unwrap();
        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.fixtures, Some(dir.path().join("market.json")));

        let absolute = dir.path().join("elsewhere").join("set.json");
        std::fs::write(
            &path,
            format!("fixtures = {:?}\n", absolute.display().to_string()),
        )
        .unwrap();
        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.fixtures, Some(absolute));
    }

    #[test]
    fn missing_default_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let file = write_config("min_investment = \"lots\"\n");
        assert!(matches!(
            DashboardConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let file = write_config("min_invest = 10\n");
        assert!(matches!(
            DashboardConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let file = write_config("min_investment = 0\n");
        assert!(matches!(
            DashboardConfig::load(file.path()),
            Err(ConfigError::Invalid(_))
        ));

        let negative = DashboardConfig {
            cost_per_side_bps: -1.0,
            ..DashboardConfig::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn default_round_trip_cost() {
        assert!((DashboardConfig::default().round_trip_cost() - 0.0004).abs() < 1e-12);
    }
}
