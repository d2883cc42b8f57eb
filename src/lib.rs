//! Monopoly Odds - Monte Carlo landing frequencies for a 40-square board

pub mod board;
pub mod core;
pub mod report;
pub mod simulation;

pub use crate::board::{Square, BOARD, BOARD_SIZE};
pub use crate::core::{Result, SimError, SimulationConfig};
pub use crate::simulation::{simulate, simulate_games, ProbabilityDistribution};
