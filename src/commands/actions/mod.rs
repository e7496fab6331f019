//! Command action handlers.
//!
//! Individual handler functions for each betting command. Each handler
//! receives a [`CommandContext`], the
//! [`RoundRegistry`](crate::rounds::RoundRegistry) of the bot and the command
//! arguments, and returns either a [`CommandResult`](crate::commands::CommandResult)
//! or a [`CommandError`].
//!
//! # Handler Pattern
//!
//! Handlers check their preconditions in a fixed order before touching any
//! round:
//! 1. Authorization (privileged commands only)
//! 2. Round existence (and state)
//! 3. Argument count
//! 4. Time parsing
//!
//! A handler returning an error never modifies the registry.
//!
//! # Available Handlers
//!
//! - [`handle_start`] - Open a round
//! - [`handle_close`] - Close a round to new bets
//! - [`handle_end`] - Resolve and remove a round
//! - [`handle_place_bet`] - Record the guesses of a participant

use crate::{
    auth::authorized,
    commands::{CommandContext, CommandError},
};

mod close;
mod end;
mod place_bet;
mod start;

pub use crate::commands::actions::{
    close::handle_close, end::handle_end, place_bet::handle_place_bet, start::handle_start,
};

/// Fails with [`CommandError::Unauthorized`] unless the author may manage rounds.
fn ensure_authorized(context: &CommandContext) -> Result<(), CommandError> {
    if authorized(context.actor, &context.settings.superusers) {
        Ok(())
    } else {
        Err(CommandError::Unauthorized)
    }
}
