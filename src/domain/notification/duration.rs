//! Toast display duration value object

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Display lifetime of a short toast, in milliseconds
pub const SHORT_MILLIS: u32 = 7_000;

/// Display lifetime of a long toast, in milliseconds
pub const LONG_MILLIS: u32 = 25_000;

/// How long the toast stays on screen.
///
/// Values other than `short` and `long` are not rejected. They are kept
/// verbatim and handed to the notification backend, which decides what to do
/// with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ToastDuration {
    #[default]
    Short,
    Long,
    Other(String),
}

impl ToastDuration {
    /// Raw string form, as passed on the command line
    pub fn as_str(&self) -> &str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
            Self::Other(raw) => raw,
        }
    }

    /// On-screen lifetime for the recognised values
    pub const fn display_millis(&self) -> Option<u32> {
        match self {
            Self::Short => Some(SHORT_MILLIS),
            Self::Long => Some(LONG_MILLIS),
            Self::Other(_) => None,
        }
    }

    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for ToastDuration {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "short" => Self::Short,
            "long" => Self::Long,
            _ => Self::Other(s.to_string()),
        })
    }
}

impl From<&str> for ToastDuration {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(d) => d,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ToastDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ToastDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_values() {
        assert_eq!(ToastDuration::from("short"), ToastDuration::Short);
        assert_eq!(ToastDuration::from("long"), ToastDuration::Long);
    }

    #[test]
    fn unknown_value_passes_through_verbatim() {
        let dur = ToastDuration::from("forever");
        assert_eq!(dur, ToastDuration::Other("forever".to_string()));
        assert_eq!(dur.as_str(), "forever");
        assert!(!dur.is_recognized());
        assert_eq!(dur.display_millis(), None);
    }

    #[test]
    fn parse_is_exact_match() {
        for raw in ["LONG", "Long", " short "] {
            let dur = ToastDuration::from(raw);
            assert_eq!(dur, ToastDuration::Other(raw.to_string()));
            assert_eq!(dur.as_str(), raw);
        }
    }

    #[test]
    fn default_is_short() {
        assert_eq!(ToastDuration::default(), ToastDuration::Short);
    }

    #[test]
    fn display_millis_for_known_values() {
        assert_eq!(ToastDuration::Short.display_millis(), Some(SHORT_MILLIS));
        assert_eq!(ToastDuration::Long.display_millis(), Some(LONG_MILLIS));
    }

    #[test]
    fn serializes_as_raw_string() {
        let json = serde_json::to_string(&ToastDuration::Long).unwrap();
        assert_eq!(json, "\"long\"");
        let json = serde_json::to_string(&ToastDuration::from("3s")).unwrap();
        assert_eq!(json, "\"3s\"");
    }
}
