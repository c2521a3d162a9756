//! Activity types.
//!
//! An activity is a queued block of free time: what it is for, how long
//! it gets, and how urgently it should be picked up. Status moves one
//! way, pending to completed, never back.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::freetime::TimeOfDay;

/// What the time block is spent on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Study,
    Games,
    Sport,
    Social,
}

impl ActivityKind {
    /// Human-readable name for display and notifications.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityKind::Study => "Study",
            ActivityKind::Games => "Games",
            ActivityKind::Sport => "Sport",
            ActivityKind::Social => "Social",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "study" => Ok(ActivityKind::Study),
            "games" => Ok(ActivityKind::Games),
            "sport" => Ok(ActivityKind::Sport),
            "social" => Ok(ActivityKind::Social),
            other => Err(PlannerError::format(other)),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Ordering weight for the pending queue. Never feeds time accounting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Descending sort key: very-high outranks everything.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::VeryHigh => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::VeryHigh => "Very High",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "very-high" => Ok(Priority::VeryHigh),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(PlannerError::format(other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Lifecycle state. `Completed` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Pending,
    Completed,
}

/// An `hh:mm` span, 00:00 through 23:59, validated on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DurationHm {
    minutes: u32,
}

impl DurationHm {
    pub fn from_minutes(minutes: u32) -> Result<Self, PlannerError> {
        if minutes >= 24 * 60 {
            return Err(PlannerError::format(format!("{minutes} minutes")));
        }
        Ok(Self { minutes })
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl FromStr for DurationHm {
    type Err = PlannerError;

    /// Same strict pattern as [`TimeOfDay`]: hour 0-23, minute 00-59.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tod: TimeOfDay = s.parse()?;
        Ok(Self {
            minutes: tod.minutes_from_midnight() as u32,
        })
    }
}

impl fmt::Display for DurationHm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl TryFrom<String> for DurationHm {
    type Error = PlannerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DurationHm> for String {
    fn from(value: DurationHm) -> Self {
        value.to_string()
    }
}

/// A queued activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier, assigned at creation, never reused.
    pub id: String,
    pub kind: ActivityKind,
    pub duration: DurationHm,
    pub priority: Priority,
    pub status: ActivityStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Activity {
    pub fn new(kind: ActivityKind, duration: DurationHm, priority: Priority) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            duration,
            priority,
            status: ActivityStatus::Pending,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ActivityStatus::Pending
    }
}
