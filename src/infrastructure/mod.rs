//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS notification service and config files.

pub mod config;
pub mod notification;

// Re-export adapters
pub use config::TomlFileConfig;
pub use notification::{
    create_notifier, Backend, DryRunNotifier, NotifyRustNotifier, NotifySendNotifier,
};
