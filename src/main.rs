mod config;
mod format;
mod import;
mod insights;
mod listing;
mod models;
mod report;
mod run;
mod ui;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = config::Config::from_args(&args)?;
    init_logging(config.verbose);

    tracing::debug!(data_dir = %config.data_dir.display(), "Resolved configuration");

    if config.command.is_empty() {
        run::as_tui(&config)
    } else {
        run::as_cli(&config)
    }
}

// Priority: RUST_LOG env var > --verbose flag > default (warn)
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
