//! Toast Notifier - show a desktop toast notification from the command line
//!
//! Parses an application id, title, message, and display duration, then
//! hands a single notification to the operating system and exits.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification request, duration, configuration layering, errors
//! - **Application**: The show-toast use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, notify-send, TOML config)
//! - **CLI**: Argument parsing, logging setup, and the runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
