//! Terminal rendering of planner state.
//!
//! Read-only: everything here works off a [`PlannerSnapshot`].

use dayplan_core::{format_minutes, ActivityStatus, PlannerSnapshot};

/// Render the activity table, priority order with insertion tiebreak.
pub fn render_table(snapshot: &PlannerSnapshot) -> String {
    let mut out = String::new();
    match snapshot.free_minutes {
        Some(free) if free > 0 => {
            out.push_str(&format!(
                "Free time: {} ({} assigned)\n",
                format_minutes(free),
                format_minutes(snapshot.assigned_minutes as i32)
            ));
        }
        Some(_) => out.push_str("Free time: 0h 0m -- no capacity, check your class window\n"),
        None => out.push_str("Free time: not computed yet (use `window HH:MM HH:MM`)\n"),
    }
    if snapshot.activities.is_empty() {
        out.push_str("No activities added\n");
        return out;
    }
    out.push_str(&format!(
        "{:<10} {:<8} {:<9} {:<10} {}\n",
        "ID", "Activity", "Duration", "Priority", "Status"
    ));
    for activity in &snapshot.activities {
        let status = match activity.status {
            ActivityStatus::Pending => "pending",
            ActivityStatus::Completed => "completed",
        };
        out.push_str(&format!(
            "{:<10} {:<8} {:<9} {:<10} {}\n",
            short_id(&activity.id),
            activity.kind.display_name(),
            activity.duration.to_string(),
            activity.priority.display_name(),
            status
        ));
    }
    out
}

/// Render the current-activity panel.
pub fn render_current(snapshot: &PlannerSnapshot) -> String {
    match snapshot.reminder.active_id() {
        Some(id) => {
            let remaining = snapshot.reminder.remaining_minutes().unwrap_or(0);
            let activity = snapshot.activities.iter().find(|a| a.id == id);
            match activity {
                Some(activity) => format!(
                    "Current activity: {} (priority {}, {} assigned, {} left)",
                    activity.kind.display_name(),
                    activity.priority.display_name(),
                    activity.duration,
                    format_minutes(remaining as i32)
                ),
                None => "No activity in progress".to_string(),
            }
        }
        None => "No activity in progress".to_string(),
    }
}

/// First chunk of a UUID, enough to address activities interactively.
pub fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayplan_core::{ActivityKind, Planner, Priority};

    fn planner() -> Planner {
        let mut planner = Planner::new();
        planner
            .set_class_window("08:00".parse().unwrap(), "14:00".parse().unwrap())
            .unwrap();
        planner
            .add_activity(
                ActivityKind::Study,
                "01:30".parse().unwrap(),
                Priority::High,
            )
            .unwrap();
        planner
    }

    #[test]
    fn table_lists_activities_with_short_ids() {
        let planner = planner();
        let table = render_table(&planner.snapshot());
        assert!(table.contains("Free time: 10h 0m"));
        assert!(table.contains("Study"));
        assert!(table.contains("01:30"));
        assert!(table.contains("pending"));
    }

    #[test]
    fn current_panel_tracks_the_countdown() {
        let mut planner = planner();
        assert_eq!(render_current(&planner.snapshot()), "No activity in progress");
        planner.start_reminder().unwrap();
        let panel = render_current(&planner.snapshot());
        assert!(panel.contains("Study"));
        assert!(panel.contains("1h 30m left"));
    }

    #[test]
    fn empty_planner_renders_placeholders() {
        let planner = Planner::new();
        let table = render_table(&planner.snapshot());
        assert!(table.contains("not computed yet"));
        assert!(table.contains("No activities added"));
    }
}
