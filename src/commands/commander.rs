//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, the entry point of every
//! chat message. It owns the betting rounds of all channels and routes parsed
//! commands to their handlers.
//!
//! # Flow
//!
//! ```text
//! ChatEvent → parse() → Command → execute() → CommandResult → MessageSink
//! ```
//!
//! # Examples
//!
//! ```ignore
//! let mut commander = Commander::new(BotSettings::default(), sink);
//! commander.handle(&ChatEvent {
//!     channel: "somechannel".to_string(),
//!     body: "!bet start".to_string(),
//!     actor: Actor::new("streamer", "Streamer", [Role::Broadcaster]),
//! });
//! assert!(commander.registry().contains("somechannel"));
//! ```

use log::debug;

use crate::{
    commands::{
        ChatEvent, CommandContext, CommandError, CommandParseError, CommandResult,
        actions::{handle_close, handle_end, handle_place_bet, handle_start},
        command::{Command, Tokenizer},
        responses::{format_command_error, format_introduction},
    },
    config::BotSettings,
    rounds::RoundRegistry,
    twitch::MessageSink,
};

/// Command dispatcher for the betting game.
///
/// The Commander is responsible for:
/// - Parsing raw message text into structured commands
/// - Routing commands to their action handlers
/// - Owning the [`RoundRegistry`] of every channel
/// - Sending replies through the injected [`MessageSink`]
///
/// # Concurrency
///
/// The registry is not synchronized. The Commander must receive messages one
/// at a time, which [`handle`](Commander::handle) enforces by taking
/// `&mut self`.
pub struct Commander<S: MessageSink> {
    /// Splits messages into command tokens
    tokenizer: Tokenizer,
    /// Bot behavior settings
    settings: BotSettings,
    /// Betting rounds of every channel
    registry: RoundRegistry,
    /// Outbound chat messages
    sink: S,
}

impl<S: MessageSink> Commander<S> {
    /// Creates a new Commander with an empty registry.
    ///
    /// # Arguments
    ///
    /// * `settings` - Command marker, superusers and reply policies
    /// * `sink` - Where replies and announcements are sent
    pub fn new(settings: BotSettings, sink: S) -> Self {
        Commander {
            tokenizer: Tokenizer::new(settings.command_prefix),
            settings,
            registry: RoundRegistry::new(),
            sink,
        }
    }

    /// Parses a message body into a structured command.
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - The message is a command
    /// * `Err(CommandParseError::NotACommand)` - No marker, or no word after it
    /// * `Err(CommandParseError::MissingSubcommand)` - `bet` alone
    pub fn parse(&self, body: &str) -> Result<Command, CommandParseError> {
        let tokens = self
            .tokenizer
            .tokenize(body)
            .ok_or(CommandParseError::NotACommand)?;

        Command::from_tokens(&tokens)
    }

    /// Executes a parsed command against the registry.
    ///
    /// Nothing is sent: the produced messages are returned to the caller.
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Start`] → [`handle_start`]
    /// - [`Command::Close`] → [`handle_close`]
    /// - [`Command::End`] → [`handle_end`]
    /// - [`Command::PlaceBet`] → [`handle_place_bet`]
    /// - [`Command::Unknown`] → [`CommandError::UnknownCommand`]
    pub fn execute(
        &mut self,
        command: &Command,
        event: &ChatEvent,
    ) -> Result<CommandResult, CommandError> {
        let context = CommandContext {
            channel: &event.channel,
            actor: &event.actor,
            settings: &self.settings,
        };
        let registry = &mut self.registry;

        match command {
            Command::Start => handle_start(&context, registry),
            Command::Close => handle_close(&context, registry),
            Command::End(answers) => handle_end(&context, registry, answers),
            Command::PlaceBet(guesses) => handle_place_bet(&context, registry, guesses),
            Command::Unknown(word) => Err(CommandError::UnknownCommand(word.clone())),
        }
    }

    /// Handles a chat message from parsing to replying.
    ///
    /// Messages that are not commands are ignored. Errors are turned into a
    /// reply to the author, or ignored when they are silent.
    pub fn handle(&mut self, event: &ChatEvent) {
        let command = match self.parse(&event.body) {
            Ok(command) => command,
            Err(e) => {
                debug!("ignoring message in {}: {:?}", event.channel, e);
                return;
            }
        };

        debug!(
            "{} sent {:?} in {}",
            event.actor.login, command, event.channel
        );

        let messages = match self.execute(&command, event) {
            Ok(result) => result.messages,
            Err(e) => {
                debug!("{:?} failed in {}: {:?}", command, event.channel, e);
                match format_command_error(&e, &event.actor, &self.settings) {
                    Some(message) => vec![message],
                    None => return,
                }
            }
        };

        for message in messages {
            self.sink.send(&event.channel, &message);
        }
    }

    /// Says the introduction message in a channel.
    pub fn introduce(&self, channel: &str) {
        self.sink.send(channel, &format_introduction());
    }

    /// Returns the rounds of every channel.
    pub fn registry(&self) -> &RoundRegistry {
        &self.registry
    }
}
