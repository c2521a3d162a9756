//! Core error types for dayplan-core.
//!
//! Every variant of [`PlannerError`] is a user-input or precondition
//! violation. Operations return them instead of panicking; the driver
//! turns them into user-visible notifications.

use std::path::PathBuf;
use thiserror::Error;

/// Error taxonomy for planner operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// Class window rejected: end must be strictly later than start.
    #[error("end of classes must be later than the start")]
    InvalidRange,

    /// Input did not match the strict `hh:mm` pattern.
    #[error("invalid time '{input}': expected hh:mm (e.g. 01:30)")]
    Format { input: String },

    /// Admission would exceed the free-time budget.
    #[error("not enough free time: {free_minutes} minutes available")]
    Capacity { free_minutes: i32 },

    /// Nothing pending to start, or a countdown is already running.
    #[error("no pending activities to start")]
    NoPendingActivity,

    /// An operation that needs an active countdown found none.
    #[error("no activity is currently active")]
    NoActiveActivity,
}

impl PlannerError {
    /// Build a format error from the offending input.
    pub fn format(input: impl Into<String>) -> Self {
        PlannerError::Format {
            input: input.into(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to write the configuration file
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse or serialize TOML
    #[error("failed to parse configuration: {0}")]
    ParseFailed(String),
}
