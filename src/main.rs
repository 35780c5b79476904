//! Toast Notifier CLI entry point

use std::process::ExitCode;

use clap::Parser;

use toast_notifier::cli::{app::run, args::Cli, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    run(cli).await
}
