//! Round ending command handler.
//!
//! Compares every recorded bet with the final answers, announces the winners
//! and removes the round from the channel.

use log::info;

use crate::{
    commands::{
        CommandContext, CommandError, CommandResult,
        actions::ensure_authorized,
        responses::{format_no_winners, format_round_ended, format_winner, format_winners_header},
    },
    rounds::{RoundRegistry, resolve},
    times::{format_times, parse_times},
};

/// Resolves and removes the betting round of the channel.
///
/// # Arguments
///
/// * `context` - Channel, author and settings of the command
/// * `registry` - Rounds of every channel
/// * `answers` - Final answer tokens, at least one is required
///
/// # Returns
///
/// - `Ok(CommandResult)`: The end announcement followed by either the winners,
///   one message each, or a no-winner message
/// - `Err(CommandError::Unauthorized)`: The author may not manage rounds
/// - `Err(CommandError::NoActiveRound)`: The channel has no round
/// - `Err(CommandError::MalformedCommand)`: No answer was given
/// - `Err(CommandError::ParseFailure)`: An answer is not a valid time
///
/// The round is only removed on success.
pub fn handle_end(
    context: &CommandContext,
    registry: &mut RoundRegistry,
    answers: &[String],
) -> Result<CommandResult, CommandError> {
    ensure_authorized(context)?;

    if !registry.contains(context.channel) {
        return Err(CommandError::NoActiveRound);
    }

    if answers.is_empty() {
        return Err(CommandError::MalformedCommand);
    }

    let answers = parse_times(answers).map_err(CommandError::ParseFailure)?;

    let round = registry
        .remove(context.channel)
        .ok_or(CommandError::NoActiveRound)?;
    let winners = resolve(round.bets(), &answers);

    info!(
        "{} ended the betting round in {} with answers [{}]: {} winner(s) out of {} bet(s)",
        context.actor.login,
        context.channel,
        format_times(&answers),
        winners.len(),
        round.bets().len()
    );

    let mut messages = vec![format_round_ended()];
    if winners.is_empty() {
        messages.push(format_no_winners());
    } else {
        messages.push(format_winners_header());
        messages.extend(winners.iter().map(|winner| format_winner(winner)));
    }

    Ok(CommandResult::new(messages))
}
