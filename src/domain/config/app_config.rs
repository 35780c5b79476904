//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::notification::request::{DEFAULT_APP_ID, DEFAULT_MESSAGE, DEFAULT_TITLE};
use crate::domain::notification::{NotificationRequest, ToastDuration};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub app_id: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub duration: Option<String>,
    pub backend: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_id: Some(DEFAULT_APP_ID.to_string()),
            title: Some(DEFAULT_TITLE.to_string()),
            message: Some(DEFAULT_MESSAGE.to_string()),
            duration: Some(ToastDuration::Short.to_string()),
            backend: Some("native".to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_id: other.app_id.or(self.app_id),
            title: other.title.or(self.title),
            message: other.message.or(self.message),
            duration: other.duration.or(self.duration),
            backend: other.backend.or(self.backend),
        }
    }

    /// Get duration, or short if not set. Unknown values are kept as-is.
    pub fn duration_or_default(&self) -> ToastDuration {
        self.duration
            .as_deref()
            .map(ToastDuration::from)
            .unwrap_or_default()
    }

    /// Get backend name, or "native" if not set
    pub fn backend_or_default(&self) -> &str {
        self.backend.as_deref().unwrap_or("native")
    }

    /// Build the notification request, filling gaps with the defaults
    pub fn to_request(&self) -> NotificationRequest {
        NotificationRequest {
            app_id: self
                .app_id
                .clone()
                .unwrap_or_else(|| DEFAULT_APP_ID.to_string()),
            title: self.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            message: self
                .message
                .clone()
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            duration: self.duration_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.app_id, Some("ClientNotifier".to_string()));
        assert_eq!(config.title, Some("DChat Client".to_string()));
        assert_eq!(config.message, Some("no message provided".to_string()));
        assert_eq!(config.duration, Some("short".to_string()));
        assert_eq!(config.backend_or_default(), "native");
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.app_id.is_none());
        assert!(config.title.is_none());
        assert!(config.message.is_none());
        assert!(config.duration.is_none());
        assert!(config.backend.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            title: Some("Base".to_string()),
            message: Some("base message".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            title: Some("Other".to_string()),
            message: None, // Should not override
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.title, Some("Other".to_string()));
        assert_eq!(merged.message, Some("base message".to_string()));
    }

    #[test]
    fn empty_config_yields_default_request() {
        assert_eq!(AppConfig::empty().to_request(), NotificationRequest::default());
        assert_eq!(AppConfig::defaults().to_request(), NotificationRequest::default());
    }

    #[test]
    fn unknown_duration_is_passed_through() {
        let config = AppConfig {
            duration: Some("medium".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.to_request().duration,
            ToastDuration::Other("medium".to_string())
        );
    }

    #[test]
    fn parses_partial_toml() {
        let config: AppConfig = toml::from_str("title = \"Build\"\nduration = \"long\"\n").unwrap();
        assert_eq!(config.title, Some("Build".to_string()));
        assert_eq!(config.duration_or_default(), ToastDuration::Long);
        assert!(config.app_id.is_none());
    }

    #[test]
    fn rejects_unknown_toml_keys() {
        assert!(toml::from_str::<AppConfig>("colour = \"red\"\n").is_err());
    }
}
