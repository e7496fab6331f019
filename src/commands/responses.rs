//! Chat response formatters for bot commands.
//!
//! Twitch chat has no multi-line messages, so every function returns a single
//! line. Replies aimed at the author of a command go through [`format_reply`].

use crate::{auth::Actor, commands::CommandError, config::BotSettings};

/// Prefixes a response with the display name of the actor it answers.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_reply("alice", "Unknown command."), "alice -> Unknown command.");
/// ```
pub fn format_reply(display_name: &str, response: &str) -> String {
    format!("{} -> {}", display_name, response)
}

/// Message said in every channel the bot joins.
pub fn format_introduction() -> String {
    format!("frammie v{} loaded.", env!("CARGO_PKG_VERSION"))
}

pub fn format_round_started() -> String {
    "Betting has started! Place your bets below!".to_owned()
}

pub fn format_round_closed() -> String {
    "Betting has closed! Everyone, good luck!".to_owned()
}

pub fn format_round_ended() -> String {
    "Betting has ended!".to_owned()
}

pub fn format_winners_header() -> String {
    "🎉 Congratulations to following winner(s):".to_owned()
}

pub fn format_winner(participant: &str) -> String {
    format!("🥳 - {}", participant)
}

pub fn format_no_winners() -> String {
    "✨ Unfortunately no winners this time, good luck on the next betting round!".to_owned()
}

pub fn format_no_active_round() -> String {
    "There is currently no active bidding!".to_owned()
}

pub fn format_round_already_active() -> String {
    "A betting round is already running! End it before starting a new one.".to_owned()
}

pub fn format_end_usage() -> String {
    "Format: bet end [time...]".to_owned()
}

pub fn format_unreadable_times() -> String {
    "Could not read your time(s).".to_owned()
}

pub fn format_unauthorized() -> String {
    "You are not allowed to do that.".to_owned()
}

pub fn format_unknown_command() -> String {
    "Unknown command.".to_owned()
}

/// Formats a command error into a reply to its author.
///
/// # Arguments
///
/// * `error` - The error raised by the action handler
/// * `actor` - Author of the failed command
/// * `settings` - Decides the replies of unauthorized and unknown commands
///
/// # Returns
///
/// * `Some(String)` - The reply to send
/// * `None` - The error is silent
pub fn format_command_error(
    error: &CommandError,
    actor: &Actor,
    settings: &BotSettings,
) -> Option<String> {
    let response = match error {
        CommandError::ParseFailure(_) => format_unreadable_times(),
        CommandError::NoActiveRound => format_no_active_round(),
        CommandError::MalformedCommand => format_end_usage(),
        CommandError::AlreadyActive => format_round_already_active(),
        CommandError::Unauthorized if settings.deny_unauthorized => format_unauthorized(),
        CommandError::UnknownCommand(_) if settings.unknown_command_reply => {
            format_unknown_command()
        }
        CommandError::Unauthorized | CommandError::UnknownCommand(_) => return None,
        CommandError::RoundClosed => return None,
    };

    Some(format_reply(&actor.display_name, &response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::times::TimeParseError;

    fn actor() -> Actor {
        Actor::new("alice", "Alice", [])
    }

    #[test]
    fn test_format_reply() {
        assert_eq!(format_reply("Alice", "hello"), "Alice -> hello");
    }

    #[test]
    fn test_format_introduction() {
        assert!(format_introduction().starts_with("frammie v"));
        assert!(format_introduction().ends_with(" loaded."));
    }

    #[test]
    fn test_format_winner() {
        assert_eq!(format_winner("alice"), "🥳 - alice");
    }

    #[test]
    fn test_format_command_error_replies() {
        let settings = BotSettings::default();
        let cases = [
            (
                CommandError::ParseFailure(TimeParseError {
                    token: "soon".to_string(),
                }),
                "Alice -> Could not read your time(s).",
            ),
            (
                CommandError::NoActiveRound,
                "Alice -> There is currently no active bidding!",
            ),
            (
                CommandError::MalformedCommand,
                "Alice -> Format: bet end [time...]",
            ),
            (
                CommandError::UnknownCommand("dance".to_string()),
                "Alice -> Unknown command.",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(
                format_command_error(&error, &actor(), &settings).as_deref(),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_format_command_error_silent() {
        let settings = BotSettings::default();
        assert!(format_command_error(&CommandError::RoundClosed, &actor(), &settings).is_none());
        assert!(format_command_error(&CommandError::Unauthorized, &actor(), &settings).is_none());
    }

    #[test]
    fn test_format_command_error_deny_unauthorized() {
        let settings = BotSettings {
            deny_unauthorized: true,
            ..BotSettings::default()
        };
        assert_eq!(
            format_command_error(&CommandError::Unauthorized, &actor(), &settings).as_deref(),
            Some("Alice -> You are not allowed to do that.")
        );
    }

    #[test]
    fn test_format_command_error_unknown_command_disabled() {
        let settings = BotSettings {
            unknown_command_reply: false,
            ..BotSettings::default()
        };
        let error = CommandError::UnknownCommand("dance".to_string());
        assert!(format_command_error(&error, &actor(), &settings).is_none());
    }
}
