//! benchrun: adaptive microbenchmark runner.

use anyhow::Result;
use benchrun_lib::{app, config};

fn main() -> Result<()> {
    let config = config::AppConfig::parse();

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let code = app::run(&config)?;
    if code != benchrun_core::exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}
