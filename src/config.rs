//! Configuration file structures for the frammie bot.
//!
//! This module defines the configuration file format using YAML. The
//! configuration is split into two sections: Twitch account settings and bot
//! behavior settings.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Twitch Account Configuration
//! twitch:
//!   # Login of the bot account
//!   username: "frammiebot"
//!   # OAuth token of the bot account
//!   token: "secret-token"
//!   # Chat server, these are the defaults
//!   host: "irc.chat.twitch.tv"
//!   port: 6667
//!   # Channels to join, more can be given on the command line
//!   channels: ["somechannel"]
//!
//! # Bot Behavior, every key is optional
//! bot:
//!   command_prefix: "!"
//!   superusers: ["operator"]
//!   unknown_command_reply: true
//!   deny_unauthorized: false
//!   replace_active_round: false
//! ```
//!
//! # Environment Variable Overrides
//!
//! Any value can be overridden with a `FRAMMIE_` prefixed variable, sections
//! separated by a double underscore (`FRAMMIE_TWITCH__TOKEN`). The
//! `TWITCH_OAUTH_TOKEN` variable is also accepted for the token.

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Prefix of environment variables overriding the configuration file.
const ENV_PREFIX: &str = "FRAMMIE_";

/// Environment variable holding the OAuth token.
const ENV_TOKEN: &str = "TWITCH_OAUTH_TOKEN";

/// Root configuration structure for the frammie bot.
///
/// # Structure
///
/// - [`Twitch`] - Twitch account and chat server settings
/// - [`BotSettings`] - Command marker, superusers and reply policies
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Twitch account configuration
    pub twitch: Twitch,
    /// Bot behavior configuration
    #[serde(default)]
    pub bot: BotSettings,
}

/// Twitch account and chat server configuration.
#[derive(Debug, Deserialize)]
pub struct Twitch {
    /// Login of the bot account.
    pub username: String,

    /// OAuth token of the bot account.
    ///
    /// The `oauth:` prefix is optional.
    pub token: String,

    /// Chat server host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Chat server plain text port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Channels to join, with or without the leading `#`.
    #[serde(default)]
    pub channels: Vec<String>,
}

/// Bot behavior settings.
///
/// Every field has a default, so the whole `bot` section is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    /// Character introducing a command.
    pub command_prefix: char,

    /// Logins allowed to manage rounds in every channel, besides the
    /// broadcaster and moderators.
    pub superusers: Vec<String>,

    /// Whether unknown commands get an "Unknown command." reply.
    pub unknown_command_reply: bool,

    /// Whether privileged commands sent by other viewers get a denial reply.
    ///
    /// When disabled they are silently ignored.
    pub deny_unauthorized: bool,

    /// Whether `bet start` discards a running round instead of refusing.
    pub replace_active_round: bool,
}

impl Default for BotSettings {
    fn default() -> Self {
        BotSettings {
            command_prefix: '!',
            superusers: Vec::new(),
            unknown_command_reply: true,
            deny_unauthorized: false,
            replace_active_round: false,
        }
    }
}

fn default_host() -> String {
    "irc.chat.twitch.tv".to_owned()
}

fn default_port() -> u16 {
    6667
}

impl Config {
    /// Loads the configuration from a YAML file and the environment.
    ///
    /// Sources are merged in this order, later ones winning:
    /// 1. The YAML file at `path`
    /// 2. `TWITCH_OAUTH_TOKEN`
    /// 3. `FRAMMIE_*` variables
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// required value is missing from every source.
    pub fn load(path: &str) -> Result<Config, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(
                Env::raw()
                    .only(&[ENV_TOKEN])
                    .map(|_| "twitch.token".into()),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }
}
