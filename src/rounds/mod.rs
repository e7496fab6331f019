//! Betting rounds, their per-channel registry and winner resolution.
//!
//! This module owns all the game state of the bot:
//!
//! - [`BettingRound`]: the guesses of one round and whether it still accepts bets
//! - [`RoundRegistry`]: at most one round per channel
//! - [`resolve`]: the arbiter comparing guesses against the final answers
//!
//! # Lifecycle
//!
//! ```text
//! NoRound ──start──▶ Open ──close──▶ Closed
//!                     │                 │
//!                     └──────end────────┴──▶ removed
//! ```
//!
//! Nothing in this module is persisted: rounds are lost when the process stops.

mod arbiter;
mod betting_round;
mod registry;

pub use crate::rounds::{
    arbiter::resolve, betting_round::BettingRound, betting_round::Bets, registry::RoundRegistry,
};
