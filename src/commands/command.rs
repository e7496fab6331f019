//! Command tokenizing and parsing.
//!
//! This module converts raw chat text into structured [`Command`] enums. It
//! works in two steps:
//!
//! 1. [`Tokenizer::tokenize`] checks the command marker and splits the rest of
//!    the line into word tokens
//! 2. [`Command::from_tokens`] maps the tokens onto a [`Command`] variant
//!
//! Time arguments are kept as raw tokens: they are read by the action
//! handlers once authorization and round checks have passed.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::commands::CommandParseError;

/// Word tokens: runs of word characters and colons, so `10:15` stays whole.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w:]+").expect("word pattern is valid"));

/// Name of the betting command, as in `!bet start`.
const BET_COMMAND: &str = "bet";

/// Represents a parsed bot command.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Command {
    /// Open a betting round on the channel
    Start,
    /// Close the round to new bets
    Close,
    /// Resolve and remove the round
    ///
    /// # Fields
    ///
    /// * `Vec<String>` - Final answer tokens, may be empty
    End(Vec<String>),
    /// Record the guesses of the author
    ///
    /// # Fields
    ///
    /// * `Vec<String>` - Guess tokens, in submission order
    PlaceBet(Vec<String>),
    /// Any command word the bot does not know
    ///
    /// # Fields
    ///
    /// * `String` - The unknown command word
    Unknown(String),
}

/// Splits chat messages into command tokens.
///
/// # Examples
///
/// ```ignore
/// let tokenizer = Tokenizer::new('!');
/// assert_eq!(
///     tokenizer.tokenize("!bet 10:00 10:15"),
///     Some(vec!["bet".to_string(), "10:00".to_string(), "10:15".to_string()])
/// );
/// assert_eq!(tokenizer.tokenize("hello"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Character introducing a command
    marker: char,
}

impl Tokenizer {
    /// Creates a tokenizer for commands introduced by `marker`.
    pub fn new(marker: char) -> Self {
        Tokenizer { marker }
    }

    /// Splits a message into command tokens.
    ///
    /// # Returns
    ///
    /// * `None` - The message does not start with the command marker
    /// * `Some(tokens)` - The word tokens following the marker, in order;
    ///   empty when nothing but punctuation follows the marker
    pub fn tokenize(&self, body: &str) -> Option<Vec<String>> {
        let rest = body.strip_prefix(self.marker)?;

        let tokens = WORD_REGEX
            .find_iter(rest)
            .map(|token| token.as_str().to_owned())
            .collect();

        Some(tokens)
    }
}

impl Command {
    /// Maps command tokens onto a [`Command`].
    ///
    /// # Arguments
    ///
    /// * `tokens` - Tokens produced by [`Tokenizer::tokenize`]
    ///
    /// # Errors
    ///
    /// * [`CommandParseError::NotACommand`] - No token at all
    /// * [`CommandParseError::MissingSubcommand`] - `bet` alone
    pub fn from_tokens(tokens: &[String]) -> Result<Self, CommandParseError> {
        let Some((name, arguments)) = tokens.split_first() else {
            return Err(CommandParseError::NotACommand);
        };

        if name != BET_COMMAND {
            return Ok(Command::Unknown(name.clone()));
        }

        let Some((subcommand, rest)) = arguments.split_first() else {
            return Err(CommandParseError::MissingSubcommand);
        };

        let command = match subcommand.as_str() {
            "start" => Command::Start,
            "close" => Command::Close,
            "end" => Command::End(rest.to_vec()),
            // Anything else is a bet: the sub-word is the first guess
            _ => Command::PlaceBet(arguments.to_vec()),
        };

        debug!("parsed command {:?}", command);

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn parse(body: &str) -> Result<Command, CommandParseError> {
        let tokenizer = Tokenizer::new('!');
        let tokens = tokenizer
            .tokenize(body)
            .ok_or(CommandParseError::NotACommand)?;
        Command::from_tokens(&tokens)
    }

    #[test]
    fn test_tokenize_without_marker() {
        let tokenizer = Tokenizer::new('!');
        assert_eq!(tokenizer.tokenize("bet start"), None);
        assert_eq!(tokenizer.tokenize(" !bet start"), None);
        assert_eq!(tokenizer.tokenize(""), None);
    }

    #[test]
    fn test_tokenize_splits_words_and_times() {
        let tokenizer = Tokenizer::new('!');
        assert_eq!(
            tokenizer.tokenize("!bet  10:00,10:15 !?"),
            Some(tokens(&["bet", "10:00", "10:15"]))
        );
    }

    #[test]
    fn test_tokenize_marker_only() {
        let tokenizer = Tokenizer::new('!');
        assert_eq!(tokenizer.tokenize("!"), Some(vec![]));
        assert_eq!(tokenizer.tokenize("! ?"), Some(vec![]));
    }

    #[test]
    fn test_tokenize_custom_marker() {
        let tokenizer = Tokenizer::new('?');
        assert_eq!(tokenizer.tokenize("?bet start"), Some(tokens(&["bet", "start"])));
        assert_eq!(tokenizer.tokenize("!bet start"), None);
    }

    #[test]
    fn test_parse_start() {
        assert_eq!(parse("!bet start"), Ok(Command::Start));
        assert_eq!(parse("!bet start now"), Ok(Command::Start));
    }

    #[test]
    fn test_parse_close() {
        assert_eq!(parse("!bet close"), Ok(Command::Close));
    }

    #[test]
    fn test_parse_end() {
        assert_eq!(
            parse("!bet end 10:00 10:15"),
            Ok(Command::End(tokens(&["10:00", "10:15"])))
        );
        assert_eq!(parse("!bet end"), Ok(Command::End(vec![])));
    }

    #[test]
    fn test_parse_place_bet() {
        assert_eq!(
            parse("!bet 10:00 10:15"),
            Ok(Command::PlaceBet(tokens(&["10:00", "10:15"])))
        );
        assert_eq!(
            parse("!bet soon"),
            Ok(Command::PlaceBet(tokens(&["soon"])))
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("!dance now"), Ok(Command::Unknown("dance".to_string())));
    }

    #[test]
    fn test_parse_bet_without_subcommand() {
        assert_eq!(parse("!bet"), Err(CommandParseError::MissingSubcommand));
    }

    #[test]
    fn test_parse_empty_command() {
        assert_eq!(parse("!"), Err(CommandParseError::NotACommand));
    }
}
