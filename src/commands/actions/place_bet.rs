//! Bet recording command handler.
//!
//! Anyone can bet while a round is open. The display name of the author is
//! the participant identifier; betting again replaces the previous guesses.

use log::{debug, info};

use crate::{
    commands::{CommandContext, CommandError, CommandResult},
    rounds::RoundRegistry,
    times::{format_times, parse_times},
};

/// Records the guesses of the author in the round of the channel.
///
/// # Returns
///
/// - `Ok(CommandResult)`: The bet is recorded; nothing is sent to the channel
/// - `Err(CommandError::NoActiveRound)`: The channel has no round
/// - `Err(CommandError::RoundClosed)`: The round refuses new bets
/// - `Err(CommandError::ParseFailure)`: A guess is not a valid time
pub fn handle_place_bet(
    context: &CommandContext,
    registry: &mut RoundRegistry,
    guesses: &[String],
) -> Result<CommandResult, CommandError> {
    let round = registry
        .get_mut(context.channel)
        .ok_or(CommandError::NoActiveRound)?;

    if round.is_closed() {
        debug!(
            "ignoring bet of {} in closed round of {}",
            context.actor.display_name, context.channel
        );
        return Err(CommandError::RoundClosed);
    }

    let times = parse_times(guesses).map_err(CommandError::ParseFailure)?;
    let formatted = format_times(&times);

    if !round.place_bet(&context.actor.display_name, times) {
        return Err(CommandError::RoundClosed);
    }

    info!(
        "{} bet [{}] in {}",
        context.actor.display_name, formatted, context.channel
    );

    Ok(CommandResult::silent())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::{auth::Actor, config::BotSettings, rounds::BettingRound, times::TimeParseError};

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn guesses(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn open_registry() -> RoundRegistry {
        let mut registry = RoundRegistry::new();
        registry.put("channel", BettingRound::new());
        registry
    }

    #[test]
    fn test_handle_place_bet_records_guesses() {
        let actor = Actor::new("alice", "Alice", []);
        let settings = BotSettings::default();
        let context = CommandContext {
            channel: "channel",
            actor: &actor,
            settings: &settings,
        };
        let mut registry = open_registry();

        let result = handle_place_bet(&context, &mut registry, &guesses(&["10:00", "10:15"]));

        assert_eq!(result, Ok(CommandResult::silent()));
        assert_eq!(
            registry.get("channel").unwrap().bet_of("Alice"),
            Some([time(10, 0), time(10, 15)].as_slice())
        );
    }

    #[test]
    fn test_handle_place_bet_replaces_guesses() {
        let actor = Actor::new("alice", "Alice", []);
        let settings = BotSettings::default();
        let context = CommandContext {
            channel: "channel",
            actor: &actor,
            settings: &settings,
        };
        let mut registry = open_registry();

        handle_place_bet(&context, &mut registry, &guesses(&["10:00", "10:15"])).unwrap();
        handle_place_bet(&context, &mut registry, &guesses(&["11:30"])).unwrap();

        assert_eq!(
            registry.get("channel").unwrap().bet_of("Alice"),
            Some([time(11, 30)].as_slice())
        );
    }

    #[test]
    fn test_handle_place_bet_no_round() {
        let actor = Actor::new("alice", "Alice", []);
        let settings = BotSettings::default();
        let context = CommandContext {
            channel: "channel",
            actor: &actor,
            settings: &settings,
        };
        let mut registry = RoundRegistry::new();

        assert_eq!(
            handle_place_bet(&context, &mut registry, &guesses(&["10:00"])),
            Err(CommandError::NoActiveRound)
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_handle_place_bet_closed_round_is_checked_before_parsing() {
        let actor = Actor::new("alice", "Alice", []);
        let settings = BotSettings::default();
        let context = CommandContext {
            channel: "channel",
            actor: &actor,
            settings: &settings,
        };
        let mut registry = open_registry();
        registry.get_mut("channel").unwrap().close();

        assert_eq!(
            handle_place_bet(&context, &mut registry, &guesses(&["soon"])),
            Err(CommandError::RoundClosed)
        );
        assert!(registry.get("channel").unwrap().bets().is_empty());
    }

    #[test]
    fn test_handle_place_bet_invalid_time_keeps_previous_bet() {
        let actor = Actor::new("alice", "Alice", []);
        let settings = BotSettings::default();
        let context = CommandContext {
            channel: "channel",
            actor: &actor,
            settings: &settings,
        };
        let mut registry = open_registry();
        handle_place_bet(&context, &mut registry, &guesses(&["10:00"])).unwrap();

        let result = handle_place_bet(&context, &mut registry, &guesses(&["10:30", "later"]));

        assert_eq!(
            result,
            Err(CommandError::ParseFailure(TimeParseError {
                token: "later".to_string()
            }))
        );
        assert_eq!(
            registry.get("channel").unwrap().bet_of("Alice"),
            Some([time(10, 0)].as_slice())
        );
    }
}
