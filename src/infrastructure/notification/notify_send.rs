//! notify-send notification adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::NotificationRequest;

const NOTIFY_SEND: &str = "notify-send";

/// notify-send notification adapter
pub struct NotifySendNotifier {
    /// Executable to invoke
    program: String,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
    pub fn new() -> Self {
        Self {
            program: NOTIFY_SEND.to_string(),
        }
    }

    /// Create with a custom executable (a wrapper script or absolute path)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the argument list for a request
    fn args(request: &NotificationRequest) -> Vec<String> {
        let mut args = vec!["--app-name".to_string(), request.app_id.clone()];
        if let Some(ms) = request.duration.display_millis() {
            args.push("--expire-time".to_string());
            args.push(ms.to_string());
        }
        // "--" keeps titles starting with a dash from being read as options
        args.push("--".to_string());
        args.push(request.title.clone());
        args.push(request.message.clone());
        args
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    async fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let status = Command::new(&self.program)
            .args(Self::args(request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::BackendNotFound(self.program.clone())
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "{} exited with status: {}",
                self.program, status
            )));
        }

        Ok(())
    }
}
