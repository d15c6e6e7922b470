//! Pure turn resolution.
//!
//! `resolve_roll` is the whole rules engine: a function of (position,
//! roll) against an immutable board, with no side effects, no randomness,
//! and no hidden state. The session applies the outcome; nothing here
//! mutates.

use crate::board::Board;
use crate::core::{Cell, Roll};

use super::outcome::{RollOutcome, Transition};

/// Resolve one roll against a position.
///
/// The exact-landing rule applies: a roll that would pass square 100
/// forfeits the move outright, it never clamps. At most one tile
/// transition applies per roll; a tile whose end square is another
/// tile's start is deliberately not chased further.
#[must_use]
pub fn resolve_roll(board: &Board, position: Cell, roll: Roll) -> RollOutcome {
    let Some(landed) = position.advance(roll) else {
        return RollOutcome::Overshoot {
            required: position.steps_to_finish(),
        };
    };

    let (final_position, transition) = match board.lookup(landed) {
        Some(tile) => (tile.end, Some(Transition::from(tile.kind))),
        None => (landed, None),
    };

    if final_position == Cell::LAST {
        RollOutcome::Win { final_position }
    } else {
        RollOutcome::Advanced {
            landed,
            final_position,
            transition,
        }
    }
}
