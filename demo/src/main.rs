//! Enclose - prints the closure demonstration to stdout.

use std::io::{self, Write};

use enclose::DemoConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // WARN by default, use RUST_LOG=debug to follow each step
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = DemoConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    enclose::demo::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
