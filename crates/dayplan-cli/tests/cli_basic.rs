//! Scripted session tests.
//!
//! The driver reads commands from stdin, so a full session can be
//! exercised by piping a script and inspecting stdout.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a scripted session and return (stdout, exit code).
fn run_session(script: &str, extra_args: &[&str]) -> (String, i32) {
    let mut child = Command::new("cargo")
        .args(["run", "-q", "-p", "dayplan-cli", "--", "--no-desktop"])
        .args(extra_args)
        .env("DAYPLAN_ENV", "dev")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn dayplan");

    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(script.as_bytes())
        .expect("failed to write script");

    let output = child.wait_with_output().expect("failed to wait for dayplan");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    (stdout, output.status.code().unwrap_or(-1))
}

#[test]
fn window_and_add_report_free_time() {
    let (stdout, code) = run_session(
        "window 08:00 14:00\nadd study 05:00 high\nlist\nquit\n",
        &[],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("You have 10h 0m free"), "stdout: {stdout}");
    assert!(stdout.contains("Activity \"Study\" added."), "stdout: {stdout}");
    assert!(stdout.contains("Study"), "stdout: {stdout}");
    assert!(stdout.contains("pending"), "stdout: {stdout}");
}

#[test]
fn over_budget_admission_is_rejected() {
    let (stdout, code) = run_session(
        "window 08:00 14:00\nadd study 05:00 high\nadd games 06:00 low\nquit\n",
        &[],
    );
    assert_eq!(code, 0);
    assert!(
        stdout.contains("not enough free time: 600 minutes available"),
        "stdout: {stdout}"
    );
}

#[test]
fn invalid_window_is_reported_not_fatal() {
    let (stdout, code) = run_session("window 14:00 08:00\nwindow 09:00 09:00\nquit\n", &[]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout
            .matches("end of classes must be later than the start")
            .count(),
        2,
        "stdout: {stdout}"
    );
}

#[test]
fn start_and_done_complete_the_queue() {
    let (stdout, code) = run_session(
        "window 08:00 14:00\nadd sport 01:00 very-high\nstart\ndone\nquit\n",
        &[],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Starting activity: Sport!"), "stdout: {stdout}");
    assert!(
        stdout.contains("Well done! Activity completed: Sport"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("All activities completed"), "stdout: {stdout}");
}

#[test]
fn done_without_an_active_activity_is_an_info_message() {
    let (stdout, code) = run_session("done\nquit\n", &[]);
    assert_eq!(code, 0);
    assert!(
        stdout.contains("no activity is currently active"),
        "stdout: {stdout}"
    );
}

#[test]
fn json_mode_emits_tagged_events() {
    let (stdout, code) = run_session("window 08:00 14:00\nquit\n", &["--json"]);
    assert_eq!(code, 0);
    let line = stdout
        .lines()
        .find(|l| l.contains("FreeTimeComputed"))
        .expect("expected a FreeTimeComputed event line");
    let value: serde_json::Value = serde_json::from_str(line).expect("event line is JSON");
    assert_eq!(value["type"], "FreeTimeComputed");
    assert_eq!(value["free_minutes"], 600);
}
