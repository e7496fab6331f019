//! Winner resolution of a betting round.

use std::collections::BTreeSet;

use chrono::NaiveTime;
use log::debug;

use crate::rounds::Bets;

/// Computes the winners of a round.
///
/// A participant wins when its guesses start with the final answers: it has at
/// least as many guesses as there are answers, and the first `answers.len()`
/// guesses are equal to the answers, index for index. Extra guesses are
/// ignored. Every qualifying participant wins; there is no ranking.
///
/// With no answers every participant wins, including one whose sequence is
/// empty.
///
/// # Arguments
///
/// * `bets` - Guesses of every participant
/// * `answers` - The final answer sequence
///
/// # Returns
///
/// The winners, sorted by participant identifier.
///
/// # Examples
///
/// ```ignore
/// let winners = resolve(round.bets(), &[ten, quarter_past_ten]);
/// for winner in &winners {
///     println!("{winner} won");
/// }
/// ```
pub fn resolve(bets: &Bets, answers: &[NaiveTime]) -> BTreeSet<String> {
    let winners: BTreeSet<String> = bets
        .iter()
        .filter(|(_, times)| times.starts_with(answers))
        .map(|(participant, _)| participant.clone())
        .collect();

    debug!(
        "{} winner(s) out of {} participant(s)",
        winners.len(),
        bets.len()
    );

    winners
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn bets(entries: Vec<(&str, Vec<NaiveTime>)>) -> Bets {
        entries
            .into_iter()
            .map(|(name, times)| (name.to_string(), times))
            .collect()
    }

    fn names(winners: &BTreeSet<String>) -> Vec<&str> {
        winners.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_exact_match_wins() {
        let bets = bets(vec![
            ("alice", vec![time(10, 0), time(10, 15)]),
            ("bob", vec![time(10, 0), time(10, 20)]),
        ]);

        let winners = resolve(&bets, &[time(10, 0), time(10, 15)]);
        assert_eq!(names(&winners), vec!["alice"]);
    }

    #[test]
    fn test_longer_sequence_wins_on_prefix() {
        let bets = bets(vec![("alice", vec![time(10, 0), time(10, 15), time(11, 0)])]);

        let winners = resolve(&bets, &[time(10, 0), time(10, 15)]);
        assert_eq!(names(&winners), vec!["alice"]);
    }

    #[test]
    fn test_shorter_sequence_loses() {
        let bets = bets(vec![("alice", vec![time(10, 0)])]);

        let winners = resolve(&bets, &[time(10, 0), time(10, 15)]);
        assert!(winners.is_empty());
    }

    #[test]
    fn test_permutation_loses() {
        let bets = bets(vec![("alice", vec![time(10, 15), time(10, 0)])]);

        let winners = resolve(&bets, &[time(10, 0), time(10, 15)]);
        assert!(winners.is_empty());
    }

    #[test]
    fn test_ties_are_sorted_by_participant() {
        let bets = bets(vec![
            ("zoe", vec![time(9, 30)]),
            ("Bob", vec![time(9, 30)]),
            ("alice", vec![time(9, 30), time(9, 45)]),
            ("carl", vec![time(9, 31)]),
        ]);

        let winners = resolve(&bets, &[time(9, 30)]);
        assert_eq!(names(&winners), vec!["Bob", "alice", "zoe"]);
    }

    #[test]
    fn test_no_answers_every_participant_wins() {
        let bets = bets(vec![("alice", vec![time(10, 0)]), ("bob", vec![])]);

        let winners = resolve(&bets, &[]);
        assert_eq!(names(&winners), vec!["alice", "bob"]);
    }

    #[test]
    fn test_no_bets_no_winners() {
        let winners = resolve(&Bets::new(), &[time(10, 0)]);
        assert!(winners.is_empty());
    }
}
