//! Monte Carlo simulation core
//!
//! Leaf-first: dice and deck feed the turn engine, the turn engine drives
//! a game, and the aggregator averages many games.

pub mod aggregate;
pub mod deck;
pub mod dice;
pub mod game;
pub mod turn;

pub use aggregate::{simulate, simulate_games, ProbabilityDistribution};
pub use deck::{resolve, EventCard, EventDeck, CARD_WEIGHTS};
pub use dice::roll;
pub use game::{run_game, LandingCounts};
pub use turn::{advance_one_turn, apply_turn, TurnOutcome};
