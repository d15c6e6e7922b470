//! Roll outcomes: the engine's tagged result type.
//!
//! Outcomes are computed, returned, and applied by the session; they are
//! never stored as game state. A UI layer sequences its animations around
//! the fields here (the landing square vs. the post-tile square).

use serde::{Deserialize, Serialize};

use crate::board::TileKind;
use crate::core::Cell;

/// A special-tile transition applied during a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Landed on a snake's head and slid down.
    SnakeSlide,
    /// Landed on a ladder's foot and climbed up.
    LadderClimb,
}

impl From<TileKind> for Transition {
    fn from(kind: TileKind) -> Self {
        match kind {
            TileKind::Snake => Transition::SnakeSlide,
            TileKind::Ladder => Transition::LadderClimb,
        }
    }
}

/// The result of resolving one roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// The roll would carry past square 100: the move is forfeited and
    /// the position unchanged. `required` is the exact roll that wins.
    Overshoot {
        /// Steps from the current square to square 100.
        required: u8,
    },
    /// A normal move. `landed` is the square the roll reached;
    /// `final_position` differs only when a tile applied.
    Advanced {
        /// Square reached by the roll, before any tile.
        landed: Cell,
        /// Square the player occupies after the move.
        final_position: Cell,
        /// The tile transition, if the landing square started one.
        transition: Option<Transition>,
    },
    /// The player reached square 100.
    Win {
        /// Always square 100.
        final_position: Cell,
    },
}

impl RollOutcome {
    /// The position after the move, or `None` for a forfeited overshoot.
    #[must_use]
    pub fn final_position(&self) -> Option<Cell> {
        match self {
            RollOutcome::Overshoot { .. } => None,
            RollOutcome::Advanced { final_position, .. }
            | RollOutcome::Win { final_position } => Some(*final_position),
        }
    }

    /// Did this roll win the game?
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, RollOutcome::Win { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_position_per_variant() {
        assert_eq!(RollOutcome::Overshoot { required: 3 }.final_position(), None);

        let advanced = RollOutcome::Advanced {
            landed: Cell::new(16),
            final_position: Cell::new(6),
            transition: Some(Transition::SnakeSlide),
        };
        assert_eq!(advanced.final_position(), Some(Cell::new(6)));

        let win = RollOutcome::Win { final_position: Cell::LAST };
        assert_eq!(win.final_position(), Some(Cell::LAST));
        assert!(win.is_win());
        assert!(!advanced.is_win());
    }

    #[test]
    fn test_transition_from_tile_kind() {
        assert_eq!(Transition::from(TileKind::Snake), Transition::SnakeSlide);
        assert_eq!(Transition::from(TileKind::Ladder), Transition::LadderClimb);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = RollOutcome::Advanced {
            landed: Cell::new(2),
            final_position: Cell::new(38),
            transition: Some(Transition::LadderClimb),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: RollOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
