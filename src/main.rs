//! Frammie - A Twitch chat bot running time betting games.
//!
//! This is the main entry point for the Frammie bot, which lets Twitch viewers
//! bet on when something will happen on stream.
//!
//! # Overview
//!
//! A moderator opens a betting round, viewers bet on one or more `HH:MM`
//! times, the moderator closes the bets and finally announces the actual
//! times. Everyone whose bet starts with the announced times wins.
//!
//! # Features
//!
//! - **Multi-Channel**: One independent round per joined channel
//! - **Multi-Time Bets**: Bet on a sequence of times, matched in order
//! - **Moderation**: Only the broadcaster, moderators and superusers manage rounds
//! - **YAML Configuration**: Simple configuration file format with environment variable support
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! twitch:
//!   username: "frammiebot"
//!   token: "your-oauth-token"
//!   channels: ["somechannel"]
//! ```
//!
//! # Environment Variable Overrides
//!
//! Override any configuration value using environment variables with the `FRAMMIE_` prefix:
//!
//! ```bash
//! export FRAMMIE_TWITCH__USERNAME="frammiebot"
//! export FRAMMIE_BOT__DENY_UNAUTHORIZED=true
//! export TWITCH_OAUTH_TOKEN="your-oauth-token"
//! ```
//!
//! # Usage
//!
//! ```bash
//! frammie --config config.yaml otherchannel
//! ```
//!
//! # Bot Commands
//!
//! - `!bet start` - Open a betting round
//! - `!bet close` - Stop accepting bets
//! - `!bet end <time> [<time>...]` - Announce the winners and end the round
//! - `!bet <time> [<time>...]` - Place or replace your bet
//!
//! # Architecture
//!
//! The bot consists of several modules:
//!
//! - [`auth`] - Chat roles and the authorization check of privileged commands
//! - [`bot`] - Main loop wiring the Twitch connection to the command dispatcher
//! - [`commands`] - Command parsing, routing and replies
//! - [`config`] - YAML configuration file structures and loading with environment variable support
//! - [`rounds`] - Betting rounds, their per-channel registry and winner resolution
//! - [`times`] - `HH:MM` time parsing and formatting
//! - [`twitch`] - Twitch chat connection and IRC message parsing
//! - [`utils`] - Channel name helpers
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//!   - Set to `debug` for verbose output
//!   - Set to `warn` or `error` for minimal logging

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod auth;
mod bot;
mod commands;
mod config;
mod rounds;
mod times;
mod twitch;
mod utils;

/// Command-line arguments for the Frammie bot.
///
/// # Examples
///
/// ```bash
/// frammie --config config.yaml somechannel otherchannel
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// The configuration file should contain the Twitch account credentials.
    /// See the [`config`] module for the expected format.
    #[arg(short, long)]
    config: String,

    /// Channels to join in addition to the configured ones.
    ///
    /// The leading `#` is optional.
    channels: Vec<String>,
}

/// Main entry point for the Frammie bot.
///
/// 1. **Logging Setup**: `info` level by default, overridden by `RUST_LOG`
/// 2. **Argument Parsing**: Parses command-line arguments using `clap`
/// 3. **Configuration Loading**: Reads the YAML file and environment overrides
/// 4. **Bot Initialization**: Connects to the Twitch chat server
/// 5. **Bot Execution**: Joins the channels and processes chat until the
///    connection ends
///
/// Every failure is logged and ends the process with a non-zero status.
#[tokio::main]
async fn main() -> std::process::ExitCode {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("frammie v{} loaded.", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    // Launch bot
    let bot = match Bot::new(config, &args.channels).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {:#}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    if let Err(e) = bot.start().await {
        error!("Bot stopped: {:#}", e);
    }
    std::process::ExitCode::FAILURE
}
