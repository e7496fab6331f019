//! Bot command parsing, routing and response formatting.
//!
//! This module is the command dispatcher of the bot: it turns chat messages
//! into betting round operations and reply messages.
//!
//! # Overview
//!
//! 1. **Tokenizing** - Detecting the command marker and splitting words
//! 2. **Parsing** - Building a structured [`command::Command`]
//! 3. **Routing** - Running the matching action handler against the
//!    [`RoundRegistry`](crate::rounds::RoundRegistry)
//! 4. **Responding** - Sending the produced messages through a
//!    [`MessageSink`](crate::twitch::MessageSink)
//!
//! # Architecture
//!
//! ```text
//! ChatEvent
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: handle()
//! └─────────────┘
//!      │
//!      ├── parse() ───────────▶ Command
//!      │
//!      └── execute() ─────────┐
//!                             ▼
//!                  ┌─────────────────────┐
//!                  │ Action Handlers     │
//!                  │  - handle_start     │
//!                  │  - handle_close     │
//!                  │  - handle_end       │
//!                  │  - handle_place_bet │
//!                  └─────────────────────┘
//!                             │
//!                             ▼
//!            CommandResult or CommandError → MessageSink
//! ```
//!
//! # Commands
//!
//! | Command | Arguments | Who | Description |
//! |---------|-----------|-----|-------------|
//! | `bet start` | None | owner, moderators, superusers | Open a betting round |
//! | `bet close` | None | owner, moderators, superusers | Refuse new bets |
//! | `bet end` | `<time> [<time>...]` | owner, moderators, superusers | Announce winners and remove the round |
//! | `bet` | `<time> [<time>...]` | everyone | Record or replace your guesses |
//!
//! Times are written `HH:MM` in 24-hour format.
//!
//! # Error Handling
//!
//! Parse errors ([`CommandParseError`]) are always silent: the message was not
//! meant for the bot. Execution errors ([`CommandError`]) may produce a reply,
//! depending on the error and on the [`BotSettings`](crate::config::BotSettings).

use crate::{auth::Actor, config::BotSettings, times::TimeParseError};

mod actions;
mod command;
mod commander;
mod responses;

pub use crate::commands::commander::Commander;

/// A chat message received on a channel.
///
/// This is the only input of the [`Commander`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEvent {
    /// Channel name, without the leading `#`
    pub channel: String,
    /// Raw message text
    pub body: String,
    /// Author of the message
    pub actor: Actor,
}

/// Runtime context for command execution.
///
/// # Fields
///
/// * `channel` - Channel where the command was sent
/// * `actor` - Author of the command
/// * `settings` - Bot behavior settings
#[derive(Debug)]
pub struct CommandContext<'a> {
    /// Channel where the command was sent
    pub channel: &'a str,
    /// Author of the command
    pub actor: &'a Actor,
    /// Bot behavior settings
    pub settings: &'a BotSettings,
}

/// Result of a successful command execution.
///
/// Every message is sent, in order, to the channel of the command. An empty
/// list means the command succeeded silently (e.g. a recorded bet).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Messages to send to the channel
    pub messages: Vec<String>,
}

impl CommandResult {
    /// Creates a result sending the given messages.
    pub fn new(messages: Vec<String>) -> Self {
        CommandResult { messages }
    }

    /// Creates a result sending nothing.
    pub fn silent() -> Self {
        CommandResult::default()
    }
}

/// Errors that can occur during command parsing.
///
/// Both variants are silent: the message is simply ignored.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandParseError {
    /// No command marker, or nothing after it
    NotACommand,
    /// `bet` without a sub-command
    MissingSubcommand,
}

/// Errors that can occur while executing a command.
///
/// None of them is fatal and none of them changes any round.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A time argument is not a valid `HH:MM` time
    ParseFailure(TimeParseError),
    /// The channel has no betting round
    NoActiveRound,
    /// The author may not run a privileged command
    Unauthorized,
    /// Required arguments are missing
    MalformedCommand,
    /// `start` while the channel already has a round
    AlreadyActive,
    /// A bet was sent to a closed round
    RoundClosed,
    /// The command word is not known
    UnknownCommand(String),
}
