//! Turn engine
//!
//! One turn: move by the dice, resolve a Chance card if the token stopped
//! on a draw square, then send it to jail if it is on Go To Jail. Each step
//! that changes the position records a landing.

use rand::Rng;

use crate::board::{Square, BOARD};
use crate::core::error::Result;
use crate::simulation::deck::{resolve, EventCard, EventDeck};
use crate::simulation::dice;

/// Result of one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Where the token ends the turn
    pub position: Square,
    /// Squares landed on, in order; one or two entries
    pub landings: Vec<Square>,
    /// Card drawn this turn, if any
    pub card: Option<EventCard>,
}

/// Play one turn with fresh dice and, if needed, a fresh card
pub fn advance_one_turn(
    position: Square,
    deck: &EventDeck,
    rng: &mut impl Rng,
) -> Result<TurnOutcome> {
    let movement = dice::roll(rng);
    apply_turn(position, movement, || deck.draw(rng))
}

/// Resolve a turn given its dice movement
///
/// `draw` is called only when the token stops on a Chance square, so tests
/// can script the card and the engine stays a pure function of its inputs.
pub fn apply_turn(
    position: Square,
    movement: u32,
    draw: impl FnOnce() -> EventCard,
) -> Result<TurnOutcome> {
    let mut current = position.advance(movement);
    let mut landings = vec![current];
    let mut card = None;

    if BOARD.is_draw_square(current) {
        let drawn = draw();
        let target = resolve(current, drawn)?;
        if target != current {
            current = target;
            landings.push(current);
        }
        card = Some(drawn);
    }

    // Only a direct dice move can reach Go To Jail; no card targets it.
    if current == Square::GO_TO_JAIL {
        current = Square::JAIL;
        landings.push(current);
    }

    tracing::trace!(from = %position, movement, to = %current, ?card, "turn");

    Ok(TurnOutcome {
        position: current,
        landings,
        card,
    })
}
