//! Board positions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of squares on the board
pub const BOARD_SIZE: usize = 40;

/// A position on the cyclic board, always in `0..BOARD_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    pub const GO: Square = Square(0);
    pub const MEDITERRANEAN_AVENUE: Square = Square(1);
    pub const READING_RAILROAD: Square = Square(5);
    pub const CHANCE_1: Square = Square(8);
    pub const JAIL: Square = Square(10);
    pub const ST_CHARLES_PLACE: Square = Square(11);
    pub const ELECTRIC_COMPANY: Square = Square(12);
    pub const PENNSYLVANIA_RAILROAD: Square = Square(15);
    pub const CHANCE_2: Square = Square(22);
    pub const ILLINOIS_AVENUE: Square = Square(24);
    pub const BO_RAILROAD: Square = Square(25);
    pub const WATER_WORKS: Square = Square(28);
    pub const GO_TO_JAIL: Square = Square(30);
    pub const SHORT_LINE_RAILROAD: Square = Square(35);
    pub const CHANCE_3: Square = Square(36);
    pub const BOARDWALK: Square = Square(39);

    /// Square at `index`, wrapped onto the board
    pub const fn new(index: usize) -> Self {
        Square((index % BOARD_SIZE) as u8)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Square reached by moving `steps` forward, passing Go as needed
    pub fn advance(self, steps: u32) -> Self {
        let steps = (steps % BOARD_SIZE as u32) as usize;
        Square::new(self.index() + steps)
    }

    /// Square reached by moving `steps` backward
    pub fn retreat(self, steps: u32) -> Self {
        let steps = (steps % BOARD_SIZE as u32) as usize;
        Square::new(self.index() + BOARD_SIZE - steps)
    }

    /// Every square in board order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).map(Square::new)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
