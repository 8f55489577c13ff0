//! Binary crate for the Telegram weather bot.
//!
//! This crate focuses on:
//! - Parsing the `-token` / `-api` flags
//! - Long-polling Telegram and dispatching commands
//! - Human-friendly reply formatting

use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod dispatcher;
mod reply;
mod runner;
mod telegram;
#[cfg(test)]
mod testing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cmd = cli::Cli::parse_args();
    cmd.run().await
}

/// Log to stderr at `info` unless `RUST_LOG` says otherwise.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
