//! Notification request entity

use serde::Serialize;

use super::ToastDuration;

pub const DEFAULT_APP_ID: &str = "ClientNotifier";
pub const DEFAULT_TITLE: &str = "DChat Client";
pub const DEFAULT_MESSAGE: &str = "no message provided";

/// A single toast to be shown. Built once per run and consumed by one dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRequest {
    /// Sender identity shown on the toast
    pub app_id: String,
    pub title: String,
    pub message: String,
    pub duration: ToastDuration,
}

impl NotificationRequest {
    pub fn new(
        app_id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        duration: ToastDuration,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            title: title.into(),
            message: message.into(),
            duration,
        }
    }
}

impl Default for NotificationRequest {
    fn default() -> Self {
        Self::new(
            DEFAULT_APP_ID,
            DEFAULT_TITLE,
            DEFAULT_MESSAGE,
            ToastDuration::Short,
        )
    }
}
