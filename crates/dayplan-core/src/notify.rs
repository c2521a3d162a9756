//! Notification sink seam.
//!
//! The planner emits [`crate::events::Event`]s; turning those into
//! something a user sees is the driver's job, through this trait.
//! Sinks are fire-and-forget: the core never blocks on delivery and a
//! failing sink must swallow its own errors.

use serde::{Deserialize, Serialize};

/// Tone of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
}

/// A place user-facing messages go.
pub trait NotificationSink {
    fn notify(&self, message: &str, severity: Severity);
}

/// Sink that drops everything. Useful in tests and headless runs.
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _message: &str, _severity: Severity) {}
}
