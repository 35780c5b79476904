//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::domain::config::AppConfig;
use crate::infrastructure::Backend;

/// Toast Notifier - show a desktop toast notification
#[derive(Parser, Debug)]
#[command(name = "toast-notifier")]
#[command(version)]
#[command(about = "Show a single desktop toast notification")]
#[command(long_about = None)]
pub struct Cli {
    /// Who the toast is being sent by [default: ClientNotifier]
    #[arg(long = "app_id", value_name = "I")]
    pub app_id: Option<String>,

    /// Toast title [default: DChat Client]
    #[arg(long, value_name = "T")]
    pub title: Option<String>,

    /// Message [default: no message provided]
    #[arg(long = "msg", value_name = "M")]
    pub message: Option<String>,

    /// Set how long the toast will show for (short|long) [default: short]
    #[arg(long = "dur", value_name = "d")]
    pub duration: Option<String>,

    /// Notification backend [default: native]
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<BackendArg>,

    /// Read default values from a TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the notification as JSON instead of showing it
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Config layer holding only the values given on the command line
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            app_id: self.app_id.clone(),
            title: self.title.clone(),
            message: self.message.clone(),
            duration: self.duration.clone(),
            backend: self.backend.map(|b| Backend::from(b).to_string()),
        }
    }
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Native,
    NotifySend,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Native => Backend::Native,
            BackendArg::NotifySend => Backend::NotifySend,
        }
    }
}
