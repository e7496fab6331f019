//! Twitch chat integration for the bot.
//!
//! Twitch chat is an IRC server with a few extensions (IRCv3 tags carrying
//! badges and display names). This module provides:
//!
//! - **Connection**: Plain TCP connection, authentication and channel joins
//!   via [`TwitchClient`]
//! - **Parsing**: IRC line parsing and conversion of `PRIVMSG` lines into
//!   [`ChatEvent`](crate::commands::ChatEvent)s
//! - **Sending**: The [`MessageSink`] trait used by the command dispatcher,
//!   and its [`OutboundSink`] implementation feeding the connection writer
//!
//! # Examples
//!
//! ```ignore
//! let credentials = TwitchCredentials {
//!     username: "frammiebot".to_string(),
//!     token: "secret".to_string(),
//! };
//!
//! let mut client = TwitchClient::connect(&credentials, "irc.chat.twitch.tv", 6667).await?;
//! client.join("somechannel");
//! while let Some(event) = client.next_event().await? {
//!     println!("[{}] {}: {}", event.channel, event.actor.display_name, event.body);
//! }
//! ```

mod client;
mod message;
mod sink;

pub use crate::twitch::{
    client::TwitchClient,
    sink::{MessageSink, OutboundSink},
};

#[cfg(test)]
pub use crate::twitch::sink::MockMessageSink;

/// Credentials of the bot Twitch account
#[derive(Debug, Clone)]
pub struct TwitchCredentials {
    /// Login of the bot account
    pub username: String,
    /// OAuth token of the bot account, with or without the `oauth:` prefix
    pub token: String,
}
