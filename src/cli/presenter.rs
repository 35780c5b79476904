//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting.
///
/// Status goes to stderr so stdout stays clean for `--dry-run` output.
#[derive(Debug, Default)]
pub struct Presenter {
    verbose: bool,
}

impl Presenter {
    /// Create a presenter that also reports successes
    pub fn verbose(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print success message to stderr (verbose mode only)
    pub fn success(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "✓".green(), message);
        }
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
