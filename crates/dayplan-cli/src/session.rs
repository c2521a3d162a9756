//! The interactive session loop.
//!
//! Owns the timers the core deliberately does not: a countdown interval
//! that drives `Planner::tick`, an idle-nudge interval for
//! `Planner::on_idle_check`, and the one-shot advancement deadline armed
//! by `AdvanceQueued` events. The countdown branch is gated on the
//! reminder being active, so entering idle disarms it in the same step
//! as the state transition; a tick that slips through anyway lands on
//! `Planner::tick`'s idle no-op.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval_at, sleep_until, Instant, MissedTickBehavior};

use dayplan_core::{
    ActivityKind, Config, DurationHm, Event, NotificationSink, Planner, PlannerError, Priority,
    Severity, TimeOfDay,
};

use crate::display;
use crate::sinks::{DesktopNotifier, TerminalSink};

const HELP: &str = "\
commands:
  window HH:MM HH:MM          compute free time from the class window
  add KIND HH:MM PRIORITY     queue an activity (kind: study|games|sport|social,
                              priority: very-high|high|medium|low)
  del ID                      delete an activity (short id is enough)
  list                        show the activity table
  start                       start the reminder on the top pending activity
  done                        complete the active activity
  stop                        stop the countdown without completing
  status                      print the planner snapshot as JSON
  quit                        exit";

enum LineOutcome {
    Continue(Vec<Event>),
    Quit,
}

pub struct Session {
    planner: Planner,
    config: Config,
    terminal: TerminalSink,
    desktop: Option<DesktopNotifier>,
    json: bool,
}

impl Session {
    pub fn new(config: Config, json: bool) -> Self {
        let desktop = if config.notifications.desktop {
            DesktopNotifier::new()
        } else {
            None
        };
        Self {
            planner: Planner::with_advance_delay(config.cadence.advance_delay_secs),
            config,
            terminal: TerminalSink,
            desktop,
            json,
        }
    }

    pub async fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let tick_period = Duration::from_secs(self.config.cadence.tick_secs.max(1));
        let nudge_period = Duration::from_secs(self.config.cadence.idle_nudge_secs.max(1));
        let mut countdown = interval_at(Instant::now() + tick_period, tick_period);
        countdown.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut nudge = interval_at(Instant::now() + nudge_period, nudge_period);
        nudge.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut advance_at: Option<Instant> = None;

        if !self.json {
            println!("dayplan -- type `help` for commands");
        }

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        None => break,
                        Some(line) => match self.handle_line(line.trim()) {
                            LineOutcome::Quit => break,
                            LineOutcome::Continue(events) => {
                                self.dispatch(events, &mut countdown, &mut advance_at);
                            }
                        },
                    }
                }
                _ = countdown.tick(), if self.planner.reminder().is_active() => {
                    let events = self.planner.tick();
                    self.dispatch(events, &mut countdown, &mut advance_at);
                }
                _ = nudge.tick() => {
                    if let Some(event) = self.planner.on_idle_check() {
                        self.dispatch(vec![event], &mut countdown, &mut advance_at);
                    }
                }
                _ = sleep_until(advance_at.unwrap_or_else(|| Instant::now() + Duration::from_secs(3600))),
                    if advance_at.is_some() =>
                {
                    advance_at = None;
                    // auto_start re-checks preconditions; a manual start
                    // or deleted queue in the meantime makes this a no-op.
                    if let Some(event) = self.planner.auto_start() {
                        self.dispatch(vec![event], &mut countdown, &mut advance_at);
                    }
                }
            }
        }
        Ok(())
    }

    // ── Input handling ───────────────────────────────────────────────

    fn handle_line(&mut self, line: &str) -> LineOutcome {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(c) => c,
            None => return LineOutcome::Continue(Vec::new()),
        };
        let args: Vec<&str> = words.collect();

        let result = match command {
            "quit" | "exit" => return LineOutcome::Quit,
            "help" => {
                println!("{HELP}");
                Ok(Vec::new())
            }
            "window" => self.cmd_window(&args),
            "add" => self.cmd_add(&args),
            "del" => Ok(self.cmd_del(&args)),
            "list" => {
                let snapshot = self.planner.snapshot();
                print!("{}", display::render_table(&snapshot));
                println!("{}", display::render_current(&snapshot));
                Ok(Vec::new())
            }
            "start" => self.planner.start_reminder().map(|e| vec![e]),
            "done" => self.planner.complete_activity(),
            "stop" => Ok(self.planner.stop_reminder().into_iter().collect()),
            "status" => {
                match serde_json::to_string_pretty(&self.planner.snapshot()) {
                    Ok(json) => println!("{json}"),
                    Err(e) => eprintln!("error: {e}"),
                }
                Ok(Vec::new())
            }
            _ => {
                self.info(&format!("unknown command '{command}', try `help`"));
                Ok(Vec::new())
            }
        };

        match result {
            Ok(events) => LineOutcome::Continue(events),
            Err(err) => {
                // Every planner error is a user-input problem; it becomes
                // a notification, never a crash or a retry.
                self.info(&err.to_string());
                LineOutcome::Continue(Vec::new())
            }
        }
    }

    fn cmd_window(&mut self, args: &[&str]) -> Result<Vec<Event>, PlannerError> {
        let (start, end) = match args {
            [start, end] => (*start, *end),
            _ => return Err(PlannerError::InvalidRange),
        };
        let start: TimeOfDay = start.parse()?;
        let end: TimeOfDay = end.parse()?;
        self.planner.set_class_window(start, end).map(|e| vec![e])
    }

    fn cmd_add(&mut self, args: &[&str]) -> Result<Vec<Event>, PlannerError> {
        let (kind, duration, priority) = match args {
            [kind, duration, priority] => (*kind, *duration, *priority),
            _ => {
                self.info("usage: add KIND HH:MM PRIORITY");
                return Ok(Vec::new());
            }
        };
        let kind: ActivityKind = kind.parse()?;
        let duration: DurationHm = duration.parse()?;
        let priority: Priority = priority.parse()?;
        self.planner
            .add_activity(kind, duration, priority)
            .map(|e| vec![e])
    }

    fn cmd_del(&mut self, args: &[&str]) -> Vec<Event> {
        let prefix = match args {
            [prefix] => *prefix,
            _ => {
                self.info("usage: del ID");
                return Vec::new();
            }
        };
        let matches: Vec<String> = self
            .planner
            .activities()
            .iter()
            .filter(|a| a.id.starts_with(prefix))
            .map(|a| a.id.clone())
            .collect();
        match matches.as_slice() {
            [] => {
                // Unknown ids are a planner no-op; tell the user anyway.
                self.info(&format!("no activity matches '{prefix}'"));
                Vec::new()
            }
            [id] => self.planner.delete_activity(id).into_iter().collect(),
            _ => {
                self.info(&format!("'{prefix}' is ambiguous, give more characters"));
                Vec::new()
            }
        }
    }

    // ── Event fan-out ────────────────────────────────────────────────

    fn dispatch(
        &mut self,
        events: Vec<Event>,
        countdown: &mut tokio::time::Interval,
        advance_at: &mut Option<Instant>,
    ) {
        for event in events {
            match &event {
                Event::AdvanceQueued { delay_secs, .. } => {
                    *advance_at = Some(Instant::now() + Duration::from_secs(*delay_secs));
                }
                Event::ReminderStarted { .. } => {
                    // Phase the countdown so the first tick lands one
                    // full period after the start, not immediately.
                    countdown.reset();
                }
                _ => {}
            }
            self.emit(&event);
        }
    }

    fn emit(&self, event: &Event) {
        if self.json {
            match serde_json::to_string(event) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("error: {e}"),
            }
            return;
        }
        if !self.config.notifications.enabled {
            return;
        }
        let message = event.message();
        let severity = event.severity();
        self.terminal.notify(&message, severity);
        if event.is_milestone() {
            if let Some(desktop) = &self.desktop {
                desktop.notify(&message, severity);
            }
        }
    }

    fn info(&self, message: &str) {
        if self.json {
            return;
        }
        self.terminal.notify(message, Severity::Info);
    }
}
