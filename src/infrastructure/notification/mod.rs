//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust (primary)
//! or the notify-send tool as fallback.

mod dry_run;
mod notify_rust;
mod notify_send;

use std::fmt;
use std::str::FromStr;

pub use dry_run::DryRunNotifier;
pub use notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;

use crate::application::ports::Notifier;
use crate::domain::error::InvalidBackendError;

/// Available notification backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// OS notification API through notify-rust
    #[default]
    Native,
    /// The freedesktop notify-send tool
    NotifySend,
}

impl Backend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::NotifySend => "notify-send",
        }
    }
}

impl FromStr for Backend {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "notify-send" => Ok(Self::NotifySend),
            _ => Err(InvalidBackendError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Create the notifier for the chosen backend
pub fn create_notifier(backend: Backend) -> Box<dyn Notifier> {
    match backend {
        Backend::Native => Box::new(NotifyRustNotifier::new()),
        Backend::NotifySend => Box::new(NotifySendNotifier::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_backends() {
        assert_eq!("native".parse::<Backend>().unwrap(), Backend::Native);
        assert_eq!("Notify-Send".parse::<Backend>().unwrap(), Backend::NotifySend);
    }

    #[test]
    fn parse_invalid_backend() {
        let err = "growl".parse::<Backend>().unwrap_err();
        assert_eq!(err.input, "growl");
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for backend in [Backend::Native, Backend::NotifySend] {
            assert_eq!(backend.to_string().parse::<Backend>().unwrap(), backend);
        }
    }
}
