//! # Dayplan Core Library
//!
//! Core business logic for Dayplan, a single-user daily activity
//! planner: compute the free time a class schedule leaves, queue
//! activities against that budget by priority, and cycle a tick-driven
//! reminder through the pending queue until everything is done.
//!
//! ## Architecture
//!
//! - **Free-Time Calculator**: pure arithmetic over time-of-day values
//! - **Planner**: the activity collection plus the single reminder
//!   countdown, a state machine that requires the caller to invoke
//!   `tick()` / `on_idle_check()` periodically -- no internal threads,
//!   no timer primitives
//! - **Events**: every state change produces a serde-tagged [`Event`]
//!   that the driver fans out to its notification sinks and display
//!
//! ## Key Components
//!
//! - [`Planner`]: planner and reminder state machine
//! - [`compute_free_minutes`]: the free-time budget formula
//! - [`Config`]: driver cadence and notification settings
//! - [`NotificationSink`]: the seam user-visible messages go through

pub mod activity;
pub mod config;
pub mod error;
pub mod events;
pub mod freetime;
pub mod notify;
pub mod planner;

pub use activity::{Activity, ActivityKind, ActivityStatus, DurationHm, Priority};
pub use config::Config;
pub use error::{ConfigError, PlannerError};
pub use events::Event;
pub use freetime::{compute_free_minutes, format_minutes, FreeTime, TimeOfDay};
pub use notify::{NotificationSink, NullSink, Severity};
pub use planner::{Planner, PlannerSnapshot, ReminderState};
