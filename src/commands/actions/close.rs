//! Round closing command handler.
//!
//! A closed round refuses new bets but can still be ended.

use log::info;

use crate::{
    commands::{
        CommandContext, CommandError, CommandResult, actions::ensure_authorized,
        responses::format_round_closed,
    },
    rounds::RoundRegistry,
};

/// Closes the betting round of the channel.
///
/// # Returns
///
/// - `Ok(CommandResult)`: The round is closed and the closing is announced
/// - `Err(CommandError::Unauthorized)`: The author may not manage rounds
/// - `Err(CommandError::NoActiveRound)`: The channel has no round
pub fn handle_close(
    context: &CommandContext,
    registry: &mut RoundRegistry,
) -> Result<CommandResult, CommandError> {
    ensure_authorized(context)?;

    let round = registry
        .get_mut(context.channel)
        .ok_or(CommandError::NoActiveRound)?;
    round.close();

    info!(
        "{} closed the betting round in {} with {} bet(s)",
        context.actor.login,
        context.channel,
        round.bets().len()
    );

    Ok(CommandResult::new(vec![format_round_closed()]))
}
