//! Per-channel registry of betting rounds.

use std::collections::HashMap;

use log::debug;

use crate::rounds::BettingRound;

/// Owns the betting round of every channel.
///
/// A channel has at most one round at a time. The registry is not
/// synchronized: it is owned by the [`Commander`](crate::commands::Commander),
/// which receives chat messages one at a time.
#[derive(Debug, Default)]
pub struct RoundRegistry {
    /// Rounds indexed by channel name
    rounds: HashMap<String, BettingRound>,
}

impl RoundRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        RoundRegistry::default()
    }

    /// Returns the round of a channel, if any.
    pub fn get(&self, channel: &str) -> Option<&BettingRound> {
        self.rounds.get(channel)
    }

    /// Returns a mutable reference to the round of a channel, if any.
    pub fn get_mut(&mut self, channel: &str) -> Option<&mut BettingRound> {
        self.rounds.get_mut(channel)
    }

    /// Stores the round of a channel.
    ///
    /// # Returns
    ///
    /// The round previously stored for this channel, which is dropped by the
    /// registry and handed back to the caller.
    pub fn put(&mut self, channel: &str, round: BettingRound) -> Option<BettingRound> {
        debug!("storing betting round for channel {}", channel);
        self.rounds.insert(channel.to_owned(), round)
    }

    /// Removes and returns the round of a channel.
    pub fn remove(&mut self, channel: &str) -> Option<BettingRound> {
        debug!("removing betting round for channel {}", channel);
        self.rounds.remove(channel)
    }

    /// Whether a channel has a round.
    pub fn contains(&self, channel: &str) -> bool {
        self.rounds.contains_key(channel)
    }

    /// Number of channels with a round.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Whether no channel has a round.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
