//! CLI layer - Command-line interface
//!
//! Contains argument parsing, logging setup, output formatting,
//! and the application runner.

pub mod app;
pub mod args;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{run, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{BackendArg, Cli};
pub use presenter::Presenter;
