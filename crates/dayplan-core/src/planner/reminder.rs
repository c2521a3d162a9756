//! Reminder countdown state.
//!
//! Two states only:
//!
//! ```text
//! Idle --start--> Active(activity, remaining)
//! Active --tick, remaining > 0--> Active (remaining - 1)
//! Active --tick, remaining == 0--> Idle (via completion)
//! Active --stop / delete active--> Idle (status untouched)
//! ```
//!
//! Owned exclusively by [`super::Planner`]; at most one countdown exists
//! at a time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ReminderState {
    Idle,
    Active {
        activity_id: String,
        remaining_minutes: u32,
    },
}

impl ReminderState {
    pub fn is_active(&self) -> bool {
        matches!(self, ReminderState::Active { .. })
    }

    pub fn active_id(&self) -> Option<&str> {
        match self {
            ReminderState::Active { activity_id, .. } => Some(activity_id),
            ReminderState::Idle => None,
        }
    }

    pub fn remaining_minutes(&self) -> Option<u32> {
        match self {
            ReminderState::Active {
                remaining_minutes, ..
            } => Some(*remaining_minutes),
            ReminderState::Idle => None,
        }
    }

    /// Arm the countdown for an activity.
    pub(super) fn arm(&mut self, activity_id: String, remaining_minutes: u32) {
        *self = ReminderState::Active {
            activity_id,
            remaining_minutes,
        };
    }

    /// Reset to idle. Returns the activity that was being counted down,
    /// if any, so callers can report what stopped. Idempotent.
    pub(super) fn disarm(&mut self) -> Option<String> {
        match std::mem::replace(self, ReminderState::Idle) {
            ReminderState::Active { activity_id, .. } => Some(activity_id),
            ReminderState::Idle => None,
        }
    }

    /// Take one countdown step. Returns the new remaining count, or
    /// `None` when idle (a stale tick, not an error).
    pub(super) fn decrement(&mut self) -> Option<u32> {
        match self {
            ReminderState::Active {
                remaining_minutes, ..
            } => {
                *remaining_minutes = remaining_minutes.saturating_sub(1);
                Some(*remaining_minutes)
            }
            ReminderState::Idle => None,
        }
    }
}

impl Default for ReminderState {
    fn default() -> Self {
        ReminderState::Idle
    }
}
