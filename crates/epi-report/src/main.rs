// File: crates/epi-report/src/main.rs
// Summary: `statistics-graph` binary; charts a statistics file to a PNG and exits non-zero on any failure.

use anyhow::{Context, Result};
use clap::Parser;
use epi_report::cli::Args;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config();
    let summary = epi_report::run(&config)
        .with_context(|| format!("failed to chart '{}'", config.input.display()))?;

    info!(
        rows = summary.retained_rows,
        output = %summary.output.display(),
        "done"
    );
    Ok(())
}
