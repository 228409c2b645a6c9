//! Structured error types for the core crate.
//!
//! These are designed to be displayable in both CLI and TUI contexts.

use std::path::PathBuf;

use thiserror::Error;

/// A categorical value that does not name any variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Failures while loading a fixture set from a provider.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("read fixture file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse fixture file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {kind} id '{id}' in fixture set")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{kind} '{id}' has {field} out of range")]
    OutOfRange {
        kind: &'static str,
        id: String,
        field: &'static str,
    },
}

/// Failures while loading the dashboard configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Why an onboarding step did not advance.
///
/// Guard failures leave the wizard where it was; they are not faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardingError {
    #[error("enter an investment amount")]
    AmountMissing,

    #[error("minimum ₹{} required", crate::format::group_indian(*.minimum))]
    AmountBelowMinimum { amount: u64, minimum: u64 },

    #[error("choose a holding period")]
    HoldingNotSelected,

    #[error("onboarding is not at the {expected} step")]
    WrongStep { expected: &'static str },

    #[error("onboarding already completed")]
    AlreadyCompleted,
}
