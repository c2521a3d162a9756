//! Notification sinks for the terminal driver.
//!
//! The terminal sink is the primary channel. The desktop channel is the
//! secondary, best-effort one: it is permission- and platform-gated and
//! swallows every failure, so a missing notification daemon never
//! surfaces as a planner error.

use dayplan_core::{NotificationSink, Severity};

/// Prints severity-prefixed lines to stdout.
pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => println!("[info] {message}"),
            Severity::Success => println!("[ok] {message}"),
        }
    }
}

/// Best-effort desktop notifications.
pub struct DesktopNotifier;

impl DesktopNotifier {
    /// `None` on platforms without a desktop notification backend.
    pub fn new() -> Option<Self> {
        platform_supported().then_some(DesktopNotifier)
    }
}

#[cfg(target_os = "linux")]
fn platform_supported() -> bool {
    true
}

#[cfg(windows)]
fn platform_supported() -> bool {
    true
}

#[cfg(not(any(target_os = "linux", windows)))]
fn platform_supported() -> bool {
    false
}

impl NotificationSink for DesktopNotifier {
    #[cfg(target_os = "linux")]
    fn notify(&self, message: &str, _severity: Severity) {
        let _ = notify_rust::Notification::new()
            .summary("Dayplan")
            .body(message)
            .show();
    }

    #[cfg(windows)]
    fn notify(&self, message: &str, _severity: Severity) {
        use tauri_winrt_notification::Toast;
        let _ = Toast::new(Toast::POWERSHELL_APP_ID)
            .title("Dayplan")
            .text1(message)
            .show();
    }

    #[cfg(not(any(target_os = "linux", windows)))]
    fn notify(&self, _message: &str, _severity: Severity) {}
}
