//! Bot module wiring the Twitch connection to the command dispatcher.
//!
//! This module provides the main [`Bot`] implementation. It connects to the
//! Twitch chat server, joins the configured channels and feeds every chat
//! message to the [`Commander`].
//!
//! # Overview
//!
//! Frammie runs time betting games in Twitch chat: a moderator opens a round,
//! viewers bet on one or more `HH:MM` times, and when the round ends the bot
//! congratulates everyone whose bet starts with the announced times.
//!
//! # Message Processing Flow
//!
//! ```text
//! Twitch line → ChatEvent → Commander::handle → CommandResult → OutboundSink
//! ```
//!
//! Messages are processed one at a time, in the order the server sent them.
//!
//! # Example
//!
//! ```ignore
//! let config = Config::load("config.yaml")?;
//!
//! // Create and start the bot
//! let bot = Bot::new(config, &[]).await?;
//! bot.start().await?; // Runs until the connection ends
//! ```

use anyhow::bail;
use log::info;

use crate::{
    commands::Commander,
    config::Config,
    twitch::{OutboundSink, TwitchClient, TwitchCredentials},
    utils::merge_channels,
};

/// Main bot structure connecting Twitch chat to the betting game.
pub struct Bot {
    /// Twitch chat connection.
    ///
    /// Provides chat messages to the main loop and the outbound sink used by
    /// the commander.
    client: TwitchClient,

    /// Command parser and executor.
    ///
    /// Owns the betting rounds of every channel. Only the main loop touches
    /// it, so no lock is needed.
    commander: Commander<OutboundSink>,

    /// Normalized names of the channels to join.
    channels: Vec<String>,
}

impl Bot {
    /// Creates a new Bot instance from the configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration loaded from file and environment
    /// * `extra_channels` - Channels given on the command line, joined in
    ///   addition to the configured ones
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - No channel is configured nor given on the command line
    /// - The chat server cannot be reached
    pub async fn new(config: Config, extra_channels: &[String]) -> Result<Self, anyhow::Error> {
        let channels = merge_channels(&config.twitch.channels, extra_channels);
        if channels.is_empty() {
            bail!("no channel to join, add some to the configuration or the command line");
        }

        let client = TwitchClient::connect(
            &TwitchCredentials {
                username: config.twitch.username,
                token: config.twitch.token,
            },
            &config.twitch.host,
            config.twitch.port,
        )
        .await?;

        let commander = Commander::new(config.bot, client.sink());

        Ok(Bot {
            client,
            commander,
            channels,
        })
    }

    /// Joins every channel and processes chat messages.
    ///
    /// The introduction message is said in each channel right after joining.
    /// This method consumes `self` and runs until the connection ends.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection fails, when the server refuses
    /// the credentials, asks for a reconnection or closes the connection. The
    /// process is expected to be restarted by its supervisor.
    pub async fn start(mut self) -> Result<(), anyhow::Error> {
        for channel in &self.channels {
            self.client.join(channel);
            self.commander.introduce(channel);
        }

        while let Some(event) = self.client.next_event().await? {
            self.commander.handle(&event);
        }

        info!(
            "connection closed with {} round(s) still running",
            self.commander.registry().len()
        );
        bail!("chat server closed the connection")
    }
}
