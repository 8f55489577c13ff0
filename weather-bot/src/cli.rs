use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};
use weather_core::provider_from_settings;

use crate::config::BotConfig;
use crate::dispatcher::Dispatcher;
use crate::runner;
use crate::telegram::TelegramBot;

/// Flags that may be spelled with a single dash, `-token` style.
const SINGLE_DASH_FLAGS: [&str; 3] = ["token", "api", "help"];

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-bot", about = "Telegram bot answering /weather <place>")]
pub struct Cli {
    /// Access token of the Telegram bot.
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// API key of Open Weather Map.
    #[arg(long, value_name = "KEY")]
    pub api: Option<String>,
}

impl Cli {
    /// Parse the process arguments, accepting `-token`/`-api` as well as
    /// `--token`/`--api`.
    pub fn parse_args() -> Self {
        let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
        Self::parse_from(normalize_args(args))
    }

    /// Start the bot. Missing credentials print the usage text and exit with
    /// status 1 before any network activity.
    pub async fn run(self) -> anyhow::Result<()> {
        let config = match BotConfig::from_credentials(self.token, self.api) {
            Ok(config) => config,
            Err(err) => {
                debug!(error = %err, "Refusing to start");
                print_usage();
                std::process::exit(1);
            }
        };

        serve(config).await
    }
}

async fn serve(config: BotConfig) -> anyhow::Result<()> {
    debug!(?config, "Starting");

    let provider = provider_from_settings(config.provider.clone())
        .context("Failed to build the weather provider client")?;
    let bot = TelegramBot::new(&config).context("Failed to build the Telegram client")?;

    let me = bot.get_me().await.context("Failed to connect to Telegram")?;
    if !me.is_bot {
        warn!(id = me.id, "Token does not belong to a bot account");
    }
    let username = me.username.unwrap_or_default();
    info!("Authorized as @{username}");

    let dispatcher = Arc::new(Dispatcher::new(provider, Box::new(bot.clone()), username));
    runner::run(bot, dispatcher, shutdown_signal()).await;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C"),
        Err(err) => {
            warn!(error = %err, "Cannot listen for Ctrl+C, the bot must be killed to stop");
            std::future::pending::<()>().await;
        }
    }
}

pub fn print_usage() {
    let program = std::env::args_os()
        .next()
        .map_or_else(|| "weather-bot".to_string(), |arg| arg.to_string_lossy().into_owned());
    println!("{}", usage(&program));
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [options]\n\
         Options:\n\
         \t -token\t access token of the telegram bot\n\
         \t -api\t API key of Open Weather Map"
    )
}

/// Rewrite `-token`, `-api=KEY` and friends into the `--` form clap expects.
/// The program name and every other argument pass through untouched.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            let single_dash = arg
                .strip_prefix('-')
                .filter(|rest| !rest.starts_with('-'))
                .map(|rest| rest.split_once('=').map_or(rest, |(name, _)| name))
                .is_some_and(|name| SINGLE_DASH_FLAGS.contains(&name));

            if i > 0 && single_dash { format!("-{arg}") } else { arg }
        })
        .collect()
}
