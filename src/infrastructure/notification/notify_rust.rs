//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::{NotificationRequest, ToastDuration};

/// Cross-platform notifier using notify-rust
#[derive(Debug, Default)]
pub struct NotifyRustNotifier;

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self
    }
}

/// Map a toast duration onto a notify-rust timeout.
/// Unrecognised durations leave the choice to the notification server.
fn timeout_for(duration: &ToastDuration) -> Timeout {
    match duration.display_millis() {
        Some(ms) => Timeout::Milliseconds(ms),
        None => Timeout::Default,
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let request = request.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut notification = Notification::new();
            notification
                .appname(&request.app_id)
                .summary(&request.title)
                .body(&request.message)
                .timeout(timeout_for(&request.duration));

            #[cfg(target_os = "windows")]
            notification.app_id(&request.app_id);

            notification
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}
