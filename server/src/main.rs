use std::io;

use anyhow::Context;
use bigtime_core::ToolContext;

fn main() {
    if let Err(error) = run() {
        eprintln!("bigtime-server error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    // Credentials are read per call, so a missing token surfaces as a
    // Credentials Error envelope rather than a startup failure.
    let ctx = ToolContext::from_env().context("failed to load BigTime client configuration")?;
    tracing::info!(base_url = %ctx.config.base_url, "serving BigTime tools on stdio");

    let stdin = io::stdin();
    let stdout = io::stdout();
    bigtime_server::serve(&ctx, stdin.lock(), stdout.lock()).context("stdio transport failed")
}

/// Logs go to stderr; stdout carries protocol traffic only.
fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("BIGTIME_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
