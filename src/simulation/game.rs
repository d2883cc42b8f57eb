//! Game runner
//!
//! A game is one token taking a fixed number of turns from Go. The starting
//! square is not a landing.

use std::ops::{Add, AddAssign};

use rand::Rng;

use crate::board::{Square, BOARD_SIZE};
use crate::core::error::Result;
use crate::simulation::deck::EventDeck;
use crate::simulation::turn::advance_one_turn;

/// Per-square landing counters for one game (or a sum of games)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingCounts([u64; BOARD_SIZE]);

impl LandingCounts {
    pub fn new() -> Self {
        Self([0; BOARD_SIZE])
    }

    pub fn record(&mut self, square: Square) {
        self.0[square.index()] += 1;
    }

    pub fn get(&self, square: Square) -> u64 {
        self.0[square.index()]
    }

    /// Total landings across the board
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

impl Default for LandingCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl AddAssign for LandingCounts {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
            *a += b;
        }
    }
}

impl Add for LandingCounts {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Play `turns` turns from Go and count every landing
pub fn run_game(turns: u32, deck: &EventDeck, rng: &mut impl Rng) -> Result<LandingCounts> {
    let mut counts = LandingCounts::new();
    let mut position = Square::GO;

    for _ in 0..turns {
        let outcome = advance_one_turn(position, deck, rng)?;
        for &square in &outcome.landings {
            counts.record(square);
        }
        position = outcome.position;
    }

    Ok(counts)
}
