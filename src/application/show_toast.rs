//! Show toast use case

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::NotificationRequest;

use super::ports::{NotificationError, Notifier};

/// Errors from the show toast use case
#[derive(Debug, Error)]
pub enum ShowToastError {
    #[error("Notification dispatch failed: {0}")]
    Dispatch(#[from] NotificationError),
}

/// Output from the show toast use case
#[derive(Debug, Clone)]
pub struct ShowToastOutput {
    /// The request that was accepted by the notification service
    pub request: NotificationRequest,
}

/// One-shot toast dispatch.
///
/// The notifier is called exactly once per execution. A failed dispatch is
/// reported to the caller and never retried.
pub struct ShowToastUseCase<N>
where
    N: Notifier,
{
    notifier: N,
}

impl<N> ShowToastUseCase<N>
where
    N: Notifier,
{
    /// Create a new use case instance
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Dispatch the toast
    pub async fn execute(
        &self,
        request: NotificationRequest,
    ) -> Result<ShowToastOutput, ShowToastError> {
        debug!(
            app_id = %request.app_id,
            title = %request.title,
            duration = %request.duration,
            "Dispatching notification"
        );

        if let Err(e) = self.notifier.notify(&request).await {
            warn!(error = %e, "Notification dispatch failed");
            return Err(e.into());
        }

        debug!("Notification accepted");
        Ok(ShowToastOutput { request })
    }
}
