//! Activity planner and reminder engine.
//!
//! [`Planner`] owns the activity collection, the free-time budget
//! snapshot, and the single reminder countdown. It is a plain state
//! machine in the style of a tick-driven timer engine: no internal
//! threads, no timer primitives. An external driver calls [`Planner::tick`]
//! on its countdown cadence, [`Planner::on_idle_check`] on its nudge
//! cadence, and [`Planner::auto_start`] when an `AdvanceQueued` event's
//! delay elapses.
//!
//! The budget is snapshotted per window computation and checked at
//! admission only; recomputing the window later does not re-validate
//! activities that were already admitted.

mod reminder;

pub use reminder::ReminderState;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityKind, ActivityStatus, DurationHm, Priority};
use crate::error::PlannerError;
use crate::events::Event;
use crate::freetime::{FreeTime, TimeOfDay};

/// Seconds between an activity completing and the next one auto-starting.
pub const DEFAULT_ADVANCE_DELAY_SECS: u64 = 3;

#[derive(Debug, Clone)]
pub struct Planner {
    /// Budget from the most recent window computation. `None` means no
    /// window has been computed yet, which admits nothing.
    free_minutes: Option<i32>,
    /// Insertion-ordered storage. Priority ordering is a derived view;
    /// insertion order is the tiebreak and must survive sorting.
    activities: Vec<Activity>,
    reminder: ReminderState,
    advance_delay_secs: u64,
}

impl Planner {
    pub fn new() -> Self {
        Self::with_advance_delay(DEFAULT_ADVANCE_DELAY_SECS)
    }

    pub fn with_advance_delay(advance_delay_secs: u64) -> Self {
        Self {
            free_minutes: None,
            activities: Vec::new(),
            reminder: ReminderState::Idle,
            advance_delay_secs,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn free_minutes(&self) -> Option<i32> {
        self.free_minutes
    }

    /// Sum of durations over all activities, completed ones included.
    pub fn assigned_minutes(&self) -> u32 {
        self.activities.iter().map(|a| a.duration.minutes()).sum()
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Derived view: descending priority rank, insertion order as the
    /// tiebreak (the sort is stable).
    pub fn activities_by_priority(&self) -> Vec<&Activity> {
        let mut view: Vec<&Activity> = self.activities.iter().collect();
        view.sort_by_key(|a| std::cmp::Reverse(a.priority.rank()));
        view
    }

    pub fn reminder(&self) -> &ReminderState {
        &self.reminder
    }

    pub fn pending_count(&self) -> usize {
        self.activities.iter().filter(|a| a.is_pending()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.activities.len() - self.pending_count()
    }

    /// Read-only state for the display collaborator.
    pub fn snapshot(&self) -> PlannerSnapshot {
        PlannerSnapshot {
            free_minutes: self.free_minutes,
            assigned_minutes: self.assigned_minutes(),
            activities: self
                .activities_by_priority()
                .into_iter()
                .cloned()
                .collect(),
            reminder: self.reminder.clone(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Compute the free-time budget for a class window and snapshot it.
    /// A rejected window leaves the previous snapshot in place.
    pub fn set_class_window(
        &mut self,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<Event, PlannerError> {
        let free_time = FreeTime::compute(start, end)?;
        self.free_minutes = Some(free_time.free_minutes);
        Ok(Event::FreeTimeComputed {
            class_minutes: free_time.class_minutes,
            free_minutes: free_time.free_minutes,
            at: Utc::now(),
        })
    }

    /// Admit a new activity against the snapshotted budget.
    pub fn add_activity(
        &mut self,
        kind: ActivityKind,
        duration: DurationHm,
        priority: Priority,
    ) -> Result<Event, PlannerError> {
        let free = self.free_minutes.unwrap_or(0);
        let assigned = self.assigned_minutes() as i64;
        if assigned + i64::from(duration.minutes()) > i64::from(free) {
            return Err(PlannerError::Capacity {
                free_minutes: free.max(0),
            });
        }
        let activity = Activity::new(kind, duration, priority);
        let event = Event::ActivityAdded {
            activity_id: activity.id.clone(),
            kind,
            duration_minutes: duration.minutes(),
            priority,
            at: Utc::now(),
        };
        self.activities.push(activity);
        Ok(event)
    }

    /// Remove an activity. Unknown ids are a no-op, not an error. When
    /// the removed activity is the one being counted down, the reminder
    /// resets to idle in the same step, so a timer firing afterwards
    /// sees an idle machine.
    pub fn delete_activity(&mut self, id: &str) -> Option<Event> {
        let pos = self.activities.iter().position(|a| a.id == id)?;
        let activity = self.activities.remove(pos);
        let was_active = self.reminder.active_id() == Some(id);
        if was_active {
            self.reminder.disarm();
        }
        Some(Event::ActivityDeleted {
            activity_id: activity.id,
            kind: activity.kind,
            was_active,
            at: Utc::now(),
        })
    }

    /// Arm the countdown for the highest-priority pending activity.
    ///
    /// Rejected while a countdown is already running -- there is at most
    /// one active reminder, even when other work is pending.
    pub fn start_reminder(&mut self) -> Result<Event, PlannerError> {
        if self.reminder.is_active() {
            return Err(PlannerError::NoPendingActivity);
        }
        let next = self
            .activities_by_priority()
            .into_iter()
            .find(|a| a.is_pending())
            .ok_or(PlannerError::NoPendingActivity)?;
        let (id, kind, minutes) = (next.id.clone(), next.kind, next.duration.minutes());
        self.reminder.arm(id.clone(), minutes);
        Ok(Event::ReminderStarted {
            activity_id: id,
            kind,
            remaining_minutes: minutes,
            at: Utc::now(),
        })
    }

    /// One countdown step, driven externally on the tick cadence.
    ///
    /// A tick that lands on an idle machine is a stale timer firing and
    /// does nothing. When the countdown is exhausted the active activity
    /// completes; otherwise the remaining count drops by one minute and
    /// a progress event goes out, with a milestone event layered on at
    /// every 30-minute mark.
    pub fn tick(&mut self) -> Vec<Event> {
        if !self.reminder.is_active() {
            return Vec::new();
        }
        if self.reminder.remaining_minutes() == Some(0) {
            return self.complete_activity().unwrap_or_default();
        }
        let remaining = match self.reminder.decrement() {
            Some(remaining) => remaining,
            None => return Vec::new(),
        };
        let id = self
            .reminder
            .active_id()
            .map(str::to_owned)
            .unwrap_or_default();
        let kind = self
            .activities
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.kind)
            .unwrap_or(ActivityKind::Study);
        let mut events = vec![Event::ReminderTick {
            activity_id: id.clone(),
            kind,
            remaining_minutes: remaining,
            at: Utc::now(),
        }];
        if remaining % 30 == 0 {
            events.push(Event::ReminderMilestone {
                activity_id: id,
                kind,
                remaining_minutes: remaining,
                at: Utc::now(),
            });
        }
        events
    }

    /// Complete the active activity and queue chained advancement.
    ///
    /// The status transition is terminal; the countdown stops in the
    /// same step. When pending work remains the driver is told to call
    /// [`Planner::auto_start`] after the configured delay; otherwise the
    /// run is over and an all-complete event goes out instead.
    pub fn complete_activity(&mut self) -> Result<Vec<Event>, PlannerError> {
        let id = self
            .reminder
            .active_id()
            .map(str::to_owned)
            .ok_or(PlannerError::NoActiveActivity)?;
        self.reminder.disarm();
        let now = Utc::now();
        let mut kind = ActivityKind::Study;
        if let Some(activity) = self.activities.iter_mut().find(|a| a.id == id) {
            activity.status = ActivityStatus::Completed;
            activity.completed_at = Some(now);
            kind = activity.kind;
        }
        let mut events = vec![Event::ActivityCompleted {
            activity_id: id,
            kind,
            at: now,
        }];
        let pending = self.pending_count();
        if pending > 0 {
            events.push(Event::AdvanceQueued {
                delay_secs: self.advance_delay_secs,
                pending,
                at: now,
            });
        } else {
            events.push(Event::AllComplete {
                completed: self.completed_count(),
                at: now,
            });
        }
        Ok(events)
    }

    /// Chained-advancement target. Re-checks preconditions: if the user
    /// already started something, or deleted the remaining work, the
    /// deferred call declines instead of double-starting.
    pub fn auto_start(&mut self) -> Option<Event> {
        self.start_reminder().ok()
    }

    /// Halt the countdown without completing anything. Idempotent.
    pub fn stop_reminder(&mut self) -> Option<Event> {
        let activity_id = self.reminder.disarm()?;
        Some(Event::ReminderStopped {
            activity_id,
            at: Utc::now(),
        })
    }

    /// Advisory idle check, driven externally on the nudge cadence.
    /// Never starts anything.
    pub fn on_idle_check(&self) -> Option<Event> {
        let pending = self.pending_count();
        if pending > 0 && !self.reminder.is_active() {
            Some(Event::IdleNudge {
                pending,
                at: Utc::now(),
            })
        } else {
            None
        }
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of planner state for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSnapshot {
    pub free_minutes: Option<i32>,
    pub assigned_minutes: u32,
    /// Priority order, insertion order as tiebreak.
    pub activities: Vec<Activity>,
    pub reminder: ReminderState,
    pub at: DateTime<Utc>,
}
