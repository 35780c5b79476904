//! Dry-run adapter: prints the request instead of showing it

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::NotificationRequest;

/// Writes each request to stdout as a single JSON line
#[derive(Debug, Default)]
pub struct DryRunNotifier;

impl DryRunNotifier {
    pub fn new() -> Self {
        Self
    }

    fn render(request: &NotificationRequest) -> Result<String, NotificationError> {
        serde_json::to_string(request).map_err(|e| NotificationError::SendFailed(e.to_string()))
    }
}

#[async_trait]
impl Notifier for DryRunNotifier {
    async fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        println!("{}", Self::render(request)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToastDuration;

    #[test]
    fn render_is_single_json_line() {
        let request = NotificationRequest::new("App", "Hello", "World", ToastDuration::Short);
        let line = DryRunNotifier::render(&request).unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(
            line,
            r#"{"app_id":"App","title":"Hello","message":"World","duration":"short"}"#
        );
    }
}
