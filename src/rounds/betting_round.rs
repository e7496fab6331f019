//! A single betting round on a channel.
//!
//! This module provides the [`BettingRound`] struct holding the guesses of
//! every participant of a round.

use std::collections::BTreeMap;

use chrono::NaiveTime;

/// Guesses indexed by participant identifier.
///
/// A `BTreeMap` keeps participants sorted so winners are always reported in
/// the same order.
pub type Bets = BTreeMap<String, Vec<NaiveTime>>;

/// One round of betting on a channel.
///
/// A round starts open, can be closed to refuse new bets, and is resolved by
/// comparing every recorded sequence with the final answers. Closing never
/// prevents resolution.
///
/// # Examples
///
/// ```ignore
/// let mut round = BettingRound::new();
/// round.place_bet("alice", vec![NaiveTime::from_hms_opt(10, 0, 0).unwrap()]);
/// round.close();
/// assert!(!round.place_bet("bob", vec![]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BettingRound {
    /// Whether the round refuses new bets
    closed: bool,
    /// Guess sequence of each participant, in submission order
    bets: Bets,
}

impl BettingRound {
    /// Creates an open round with no bets.
    pub fn new() -> Self {
        BettingRound::default()
    }

    /// Closes the round to new bets. Closing twice is harmless.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Whether the round refuses new bets.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Records the guesses of a participant.
    ///
    /// A participant has exactly one sequence: a new submission replaces the
    /// previous one instead of extending it.
    ///
    /// # Arguments
    ///
    /// * `participant` - Identifier of the participant (display name)
    /// * `times` - Ordered guesses; position `i` is compared to answer `i`
    ///
    /// # Returns
    ///
    /// `true` if the bet was recorded, `false` if the round is closed, in
    /// which case the round is left untouched.
    pub fn place_bet(&mut self, participant: &str, times: Vec<NaiveTime>) -> bool {
        if self.closed {
            return false;
        }

        self.bets.insert(participant.to_owned(), times);
        true
    }

    /// Returns the guesses of a participant, if any.
    pub fn bet_of(&self, participant: &str) -> Option<&[NaiveTime]> {
        self.bets.get(participant).map(Vec::as_slice)
    }

    /// Returns every recorded bet.
    pub fn bets(&self) -> &Bets {
        &self.bets
    }
}
