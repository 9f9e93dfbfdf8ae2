use std::io;

use anyhow::Context;
use rusty_library_cli::{
    adapters::SystemClock,
    application::{Library, LibraryDependencies},
    cli::Session,
    config::{AppConfig, LoggingConfig},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    let default_loan_period = config.default_loan_period()?;
    tracing::info!(
        default_loan_days = default_loan_period.days(),
        "library desk starting"
    );

    // プロセス全体で1つの図書館をメニューに渡す
    let library = Library::new(
        LibraryDependencies::in_memory(SystemClock),
        default_loan_period,
    );

    let stdin = io::stdin();
    let mut session = Session::new(library, stdin.lock(), io::stdout());
    session.run().context("Terminal I/O failed")?;

    tracing::info!("library desk stopped");
    Ok(())
}

/// ログは標準エラーに出し、標準出力のメニューと混ざらないようにする
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("rusty_library_cli={}", logging.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}
