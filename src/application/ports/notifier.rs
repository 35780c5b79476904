//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::NotificationRequest;

/// Notification dispatch errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("{0} not found")]
    BackendNotFound(String),

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Submit a toast to the notification service.
    ///
    /// Returns once the service has accepted the request. Does not wait
    /// for the toast to be dismissed.
    ///
    /// # Arguments
    /// * `request` - The toast to show
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.as_ref().notify(request).await
    }
}
