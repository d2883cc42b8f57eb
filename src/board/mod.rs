//! The fixed 40-square board
//!
//! One static table maps every square to its conventional name and its
//! semantic role. Named positions live as constants on [`Square`].

pub mod square;

pub use square::{Square, BOARD_SIZE};

use serde::{Deserialize, Serialize};

/// What a square does when the token lands on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareRole {
    Go,
    Property,
    Railroad,
    Utility,
    /// Draw square: landing draws an event card
    Chance,
    /// Inert in this model
    CommunityChest,
    Tax,
    Jail,
    FreeParking,
    GoToJail,
}

/// Static description of one square
#[derive(Debug, Clone, Copy)]
pub struct SquareInfo {
    pub name: &'static str,
    pub role: SquareRole,
}

const fn info(name: &'static str, role: SquareRole) -> SquareInfo {
    SquareInfo { name, role }
}

/// The board layout, indexed by square
pub struct Board {
    squares: [SquareInfo; BOARD_SIZE],
}

impl Board {
    pub fn info(&self, square: Square) -> &SquareInfo {
        &self.squares[square.index()]
    }

    pub fn name(&self, square: Square) -> &'static str {
        self.info(square).name
    }

    pub fn role(&self, square: Square) -> SquareRole {
        self.info(square).role
    }

    /// Whether landing on `square` draws an event card
    pub fn is_draw_square(&self, square: Square) -> bool {
        self.role(square) == SquareRole::Chance
    }

    /// All squares with the given role, in board order
    pub fn squares_with_role(&self, role: SquareRole) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&s| self.role(s) == role)
    }
}

use SquareRole::*;

pub static BOARD: Board = Board {
    squares: [
        info("GO", Go),
        info("Mediterranean Avenue", Property),
        info("Community Chest", CommunityChest),
        info("Baltic Avenue", Property),
        info("Income Tax", Tax),
        info("Reading Railroad", Railroad),
        info("Oriental Avenue", Property),
        info("Vermont Avenue", Property),
        info("Chance", Chance),
        info("Connecticut Avenue", Property),
        info("Jail", Jail),
        info("St. Charles Place", Property),
        info("Electric Company", Utility),
        info("States Avenue", Property),
        info("Virginia Avenue", Property),
        info("Pennsylvania Railroad", Railroad),
        info("St. James Place", Property),
        info("Community Chest", CommunityChest),
        info("Tennessee Avenue", Property),
        info("New York Avenue", Property),
        info("Free Parking", FreeParking),
        info("Kentucky Avenue", Property),
        info("Chance", Chance),
        info("Indiana Avenue", Property),
        info("Illinois Avenue", Property),
        info("B. & O. Railroad", Railroad),
        info("Atlantic Avenue", Property),
        info("Ventnor Avenue", Property),
        info("Water Works", Utility),
        info("Marvin Gardens", Property),
        info("Go To Jail", GoToJail),
        info("Pacific Avenue", Property),
        info("North Carolina Avenue", Property),
        info("Community Chest", CommunityChest),
        info("Pennsylvania Avenue", Property),
        info("Short Line Railroad", Railroad),
        info("Chance", Chance),
        info("Park Place", Property),
        info("Luxury Tax", Tax),
        info("Boardwalk", Property),
    ],
};
