//! Domain layer - Core value objects
//!
//! Contains the notification request, its configuration layering, and
//! domain errors. This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod notification;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use notification::{NotificationRequest, ToastDuration};
