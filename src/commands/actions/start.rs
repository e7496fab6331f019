//! Round opening command handler.
//!
//! Opens a betting round on the channel of the command. Only one round can
//! exist per channel: starting while a round is running is refused, unless
//! `replace_active_round` is enabled, in which case the running round and its
//! bets are discarded.

use log::{info, warn};

use crate::{
    commands::{
        CommandContext, CommandError, CommandResult, actions::ensure_authorized,
        responses::format_round_started,
    },
    rounds::{BettingRound, RoundRegistry},
};

/// Opens a new betting round.
///
/// # Returns
///
/// - `Ok(CommandResult)`: The round is open and the start is announced
/// - `Err(CommandError::Unauthorized)`: The author may not manage rounds
/// - `Err(CommandError::AlreadyActive)`: The channel already has a round
pub fn handle_start(
    context: &CommandContext,
    registry: &mut RoundRegistry,
) -> Result<CommandResult, CommandError> {
    ensure_authorized(context)?;

    if registry.contains(context.channel) && !context.settings.replace_active_round {
        return Err(CommandError::AlreadyActive);
    }

    if let Some(previous) = registry.put(context.channel, BettingRound::new()) {
        warn!(
            "discarding running round of {} with {} bet(s)",
            context.channel,
            previous.bets().len()
        );
    }

    info!(
        "{} started a betting round in {}",
        context.actor.login, context.channel
    );

    Ok(CommandResult::new(vec![format_round_started()]))
}
