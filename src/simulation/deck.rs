//! Chance deck
//!
//! Draws are independent and identically distributed: the deck is
//! reshuffled with every card put back, so each draw is a categorical
//! sample over [`CARD_WEIGHTS`]. The weights sum to 16 slots.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Square, BOARD};
use crate::core::error::{Result, SimError};

/// Effect class of a Chance card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCard {
    NearestUtility,
    BackThree,
    NearestRailroad,
    AdvanceToGo,
    AdvanceToStCharles,
    AdvanceToIllinois,
    AdvanceToBoardwalk,
    AdvanceToReadingRailroad,
    GoToJail,
    GetOutOfJailFree,
    CollectMoney,
    PayMoney,
}

impl EventCard {
    /// Whether the card can move the token
    pub fn moves_token(&self) -> bool {
        !matches!(
            self,
            Self::GetOutOfJailFree | Self::CollectMoney | Self::PayMoney
        )
    }

    /// Share of the deck this card occupies
    pub fn probability(&self) -> f64 {
        let weight = CARD_WEIGHTS
            .iter()
            .find(|(card, _)| card == self)
            .map(|&(_, w)| w)
            .unwrap_or(0);
        weight as f64 / TOTAL_WEIGHT as f64
    }
}

/// Card → number of slots in the deck
pub const CARD_WEIGHTS: [(EventCard, u32); 12] = [
    (EventCard::GetOutOfJailFree, 1),
    (EventCard::CollectMoney, 3),
    (EventCard::PayMoney, 3),
    (EventCard::GoToJail, 1),
    (EventCard::NearestUtility, 1),
    (EventCard::BackThree, 1),
    (EventCard::NearestRailroad, 1),
    (EventCard::AdvanceToGo, 1),
    (EventCard::AdvanceToStCharles, 1),
    (EventCard::AdvanceToIllinois, 1),
    (EventCard::AdvanceToBoardwalk, 1),
    (EventCard::AdvanceToReadingRailroad, 1),
];

pub const TOTAL_WEIGHT: u32 = {
    let mut total = 0;
    let mut i = 0;
    while i < CARD_WEIGHTS.len() {
        total += CARD_WEIGHTS[i].1;
        i += 1;
    }
    total
};

/// Stateless weighted sampler over the card table
#[derive(Debug, Clone)]
pub struct EventDeck {
    /// Running weight totals, parallel to `CARD_WEIGHTS`
    cumulative: [u32; CARD_WEIGHTS.len()],
}

impl EventDeck {
    pub fn new() -> Self {
        let mut cumulative = [0; CARD_WEIGHTS.len()];
        let mut running = 0;
        for (slot, &(_, weight)) in cumulative.iter_mut().zip(CARD_WEIGHTS.iter()) {
            running += weight;
            *slot = running;
        }
        Self { cumulative }
    }

    /// Draw one card
    pub fn draw(&self, rng: &mut impl Rng) -> EventCard {
        let roll = rng.gen_range(0..TOTAL_WEIGHT);
        let idx = self.cumulative.partition_point(|&c| c <= roll);
        CARD_WEIGHTS[idx].0
    }
}

impl Default for EventDeck {
    fn default() -> Self {
        Self::new()
    }
}

/// Square the token ends on after `card` is drawn at `draw_square`
///
/// Cards without movement leave the token where it is. Fails on any square
/// that is not a Chance square.
pub fn resolve(draw_square: Square, card: EventCard) -> Result<Square> {
    if !BOARD.is_draw_square(draw_square) {
        return Err(SimError::NotADrawSquare(draw_square));
    }

    let target = match card {
        EventCard::NearestUtility => {
            if draw_square == Square::CHANCE_1 || draw_square == Square::CHANCE_3 {
                Square::ELECTRIC_COMPANY
            } else {
                Square::WATER_WORKS
            }
        }
        EventCard::BackThree => draw_square.retreat(3),
        EventCard::NearestRailroad => match draw_square {
            Square::CHANCE_1 => Square::PENNSYLVANIA_RAILROAD,
            Square::CHANCE_2 => Square::BO_RAILROAD,
            _ => Square::READING_RAILROAD,
        },
        EventCard::AdvanceToGo => Square::GO,
        EventCard::AdvanceToStCharles => Square::ST_CHARLES_PLACE,
        EventCard::AdvanceToIllinois => Square::ILLINOIS_AVENUE,
        EventCard::AdvanceToBoardwalk => Square::BOARDWALK,
        EventCard::AdvanceToReadingRailroad => Square::READING_RAILROAD,
        EventCard::GoToJail => Square::JAIL,
        EventCard::GetOutOfJailFree | EventCard::CollectMoney | EventCard::PayMoney => {
            draw_square
        }
    };

    Ok(target)
}
