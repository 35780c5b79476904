//! Main app runner

use std::path::Path;
use std::process::ExitCode;

use tracing::{debug, info};

use crate::application::ports::{ConfigSource, Notifier};
use crate::application::{ShowToastError, ShowToastOutput, ShowToastUseCase};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::NotificationRequest;
use crate::infrastructure::{create_notifier, Backend, DryRunNotifier, TomlFileConfig};

use super::args::Cli;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub request: NotificationRequest,
    pub backend: Backend,
    pub dry_run: bool,
}

/// Load and merge configuration: defaults < config file < cli
pub async fn load_merged_config(
    cli_config: AppConfig,
    config_path: Option<&Path>,
) -> Result<AppConfig, ConfigError> {
    let file_config = match config_path {
        Some(path) => {
            let source = TomlFileConfig::new(path);
            debug!(path = %source.path().display(), "Loading config file");
            source.load().await?
        }
        None => AppConfig::empty(),
    };

    Ok(AppConfig::defaults().merge(file_config).merge(cli_config))
}

/// Resolve parsed arguments into run options
pub async fn resolve_options(cli: &Cli) -> Result<RunOptions, ConfigError> {
    let config = load_merged_config(cli.to_config(), cli.config.as_deref()).await?;

    let backend = config
        .backend_or_default()
        .parse::<Backend>()
        .map_err(|e| ConfigError::ValidationError {
            key: "backend".to_string(),
            message: e.to_string(),
        })?;

    Ok(RunOptions {
        request: config.to_request(),
        backend,
        dry_run: cli.dry_run,
    })
}

/// Dispatch a request through the given notifier
pub async fn dispatch<N: Notifier>(
    notifier: N,
    request: NotificationRequest,
) -> Result<ShowToastOutput, ShowToastError> {
    ShowToastUseCase::new(notifier).execute(request).await
}

/// Run the tool with parsed arguments
pub async fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::verbose(cli.verbose > 0);

    let options = match resolve_options(&cli).await {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    if !options.request.duration.is_recognized() {
        presenter.warn(&format!(
            "Unrecognised duration \"{}\" (expected short or long), passing it through",
            options.request.duration
        ));
    }

    let notifier: Box<dyn Notifier> = if options.dry_run {
        Box::new(DryRunNotifier::new())
    } else {
        info!(backend = %options.backend, "Using notification backend");
        create_notifier(options.backend)
    };

    match dispatch(notifier, options.request).await {
        Ok(output) => {
            presenter.success(&format!("Notification sent: {}", output.request.title));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
