//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operation and trait definitions
//! for external system interactions.

pub mod ports;
pub mod show_toast;

// Re-export use cases
pub use show_toast::{ShowToastError, ShowToastOutput, ShowToastUseCase};
