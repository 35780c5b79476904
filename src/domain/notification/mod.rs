//! Notification value objects

pub mod duration;
pub mod request;

pub use duration::ToastDuration;
pub use request::NotificationRequest;
