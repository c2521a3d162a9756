//! Planner events.
//!
//! Every state change produces an [`Event`]. The driver fans them out to
//! its sinks and the display; scripts can consume them as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::{ActivityKind, Priority};
use crate::freetime::format_minutes;
use crate::notify::Severity;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A class window was computed and snapshotted as the budget.
    FreeTimeComputed {
        class_minutes: i32,
        free_minutes: i32,
        at: DateTime<Utc>,
    },
    ActivityAdded {
        activity_id: String,
        kind: ActivityKind,
        duration_minutes: u32,
        priority: Priority,
        at: DateTime<Utc>,
    },
    ActivityDeleted {
        activity_id: String,
        kind: ActivityKind,
        /// The deleted activity was the one being counted down; the
        /// reminder has been reset to idle.
        was_active: bool,
        at: DateTime<Utc>,
    },
    ReminderStarted {
        activity_id: String,
        kind: ActivityKind,
        remaining_minutes: u32,
        at: DateTime<Utc>,
    },
    /// One countdown step elapsed.
    ReminderTick {
        activity_id: String,
        kind: ActivityKind,
        remaining_minutes: u32,
        at: DateTime<Utc>,
    },
    /// Remaining time crossed a 30-minute mark; worth a louder nudge.
    ReminderMilestone {
        activity_id: String,
        kind: ActivityKind,
        remaining_minutes: u32,
        at: DateTime<Utc>,
    },
    /// Countdown halted without completing anything.
    ReminderStopped {
        activity_id: String,
        at: DateTime<Utc>,
    },
    ActivityCompleted {
        activity_id: String,
        kind: ActivityKind,
        at: DateTime<Utc>,
    },
    /// More work is pending; the driver should schedule a one-shot call
    /// to `Planner::auto_start` after the given delay.
    AdvanceQueued {
        delay_secs: u64,
        pending: usize,
        at: DateTime<Utc>,
    },
    AllComplete {
        completed: usize,
        at: DateTime<Utc>,
    },
    /// Advisory: the machine is idle while work is pending.
    IdleNudge {
        pending: usize,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// User-facing message for notification sinks.
    pub fn message(&self) -> String {
        match self {
            Event::FreeTimeComputed { free_minutes, .. } => {
                if *free_minutes > 0 {
                    format!(
                        "You have {} free for activities today.",
                        format_minutes(*free_minutes)
                    )
                } else {
                    "No free time left after sleep and classes. Check your class window."
                        .to_string()
                }
            }
            Event::ActivityAdded { kind, .. } => {
                format!("Activity \"{}\" added.", kind.display_name())
            }
            Event::ActivityDeleted { kind, was_active, .. } => {
                if *was_active {
                    format!(
                        "Activity \"{}\" deleted; reminder stopped.",
                        kind.display_name()
                    )
                } else {
                    format!("Activity \"{}\" deleted.", kind.display_name())
                }
            }
            Event::ReminderStarted { kind, .. } => {
                format!("Starting activity: {}!", kind.display_name())
            }
            Event::ReminderTick { kind, remaining_minutes, .. }
            | Event::ReminderMilestone { kind, remaining_minutes, .. } => format!(
                "Time left for {}: {}",
                kind.display_name(),
                format_minutes(*remaining_minutes as i32)
            ),
            Event::ReminderStopped { .. } => "Reminder stopped.".to_string(),
            Event::ActivityCompleted { kind, .. } => format!(
                "Well done! Activity completed: {}",
                kind.display_name()
            ),
            Event::AdvanceQueued { delay_secs, .. } => {
                format!("Next activity starts in {delay_secs}s.")
            }
            Event::AllComplete { .. } => {
                "All activities completed. Good work!".to_string()
            }
            Event::IdleNudge { pending, .. } => format!(
                "You have {pending} pending activit{}. Start one to stay productive!",
                if *pending == 1 { "y" } else { "ies" }
            ),
        }
    }

    /// Message tone for the sinks.
    pub fn severity(&self) -> Severity {
        match self {
            Event::ActivityAdded { .. }
            | Event::ReminderStarted { .. }
            | Event::ActivityCompleted { .. }
            | Event::AllComplete { .. } => Severity::Success,
            Event::FreeTimeComputed { free_minutes, .. } if *free_minutes > 0 => {
                Severity::Success
            }
            _ => Severity::Info,
        }
    }

    /// Events important enough for the best-effort desktop channel.
    pub fn is_milestone(&self) -> bool {
        matches!(
            self,
            Event::FreeTimeComputed { .. }
                | Event::ActivityAdded { .. }
                | Event::ReminderStarted { .. }
                | Event::ReminderMilestone { .. }
                | Event::ActivityCompleted { .. }
                | Event::AllComplete { .. }
                | Event::IdleNudge { .. }
        )
    }
}
