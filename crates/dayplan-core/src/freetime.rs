//! Free-time calculation.
//!
//! Pure arithmetic over time-of-day values: a day has 1440 minutes, a
//! fixed 480-minute sleep allowance is reserved, and whatever the class
//! window occupies is subtracted. The result may be negative; callers
//! treat anything `<= 0` as "no capacity" rather than an error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Minutes in a full day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Fixed sleep reservation (8 hours).
pub const SLEEP_MINUTES: i32 = 8 * 60;

/// A clock time within a single day, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Build from components. Fails when hour > 23 or minute > 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, PlannerError> {
        if hour > 23 || minute > 59 {
            return Err(PlannerError::format(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn minutes_from_midnight(&self) -> i32 {
        i32::from(self.hour) * 60 + i32::from(self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = PlannerError;

    /// Strict `hh:mm`: hour is one digit or a zero-padded pair up to 23,
    /// minute is exactly two digits up to 59. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PlannerError::format(s);
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(err());
        }
        if !h.bytes().all(|b| b.is_ascii_digit()) || !m.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let hour: u8 = h.parse().map_err(|_| err())?;
        let minute: u8 = m.parse().map_err(|_| err())?;
        TimeOfDay::new(hour, minute).map_err(|_| err())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Free minutes left after sleep and the class window.
///
/// Fails with [`PlannerError::InvalidRange`] when `end <= start` -- a tie
/// is an invalid window, not a zero-duration one. The result is negative
/// exactly when the class window exceeds 960 minutes.
pub fn compute_free_minutes(start: TimeOfDay, end: TimeOfDay) -> Result<i32, PlannerError> {
    if end <= start {
        return Err(PlannerError::InvalidRange);
    }
    let class_minutes = end.minutes_from_midnight() - start.minutes_from_midnight();
    Ok(MINUTES_PER_DAY - SLEEP_MINUTES - class_minutes)
}

/// Display summary of one window computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeTime {
    pub class_minutes: i32,
    pub free_minutes: i32,
}

impl FreeTime {
    pub fn compute(start: TimeOfDay, end: TimeOfDay) -> Result<Self, PlannerError> {
        let free_minutes = compute_free_minutes(start, end)?;
        Ok(Self {
            class_minutes: end.minutes_from_midnight() - start.minutes_from_midnight(),
            free_minutes,
        })
    }

    /// Whether any time is left to hand out to activities.
    pub fn has_capacity(&self) -> bool {
        self.free_minutes > 0
    }

    pub fn class_display(&self) -> String {
        format_minutes(self.class_minutes)
    }

    /// Free time clamped at zero for display, matching the capacity rule.
    pub fn free_display(&self) -> String {
        format_minutes(self.free_minutes.max(0))
    }
}

/// Render a minute count as `XhYm`.
pub fn format_minutes(minutes: i32) -> String {
    let minutes = minutes.max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}
