//! Turn history: one record per accepted roll.
//!
//! Records support replay inspection and carry enough to narrate each
//! move as table talk.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Roll};
use crate::engine::{RollOutcome, Transition};

/// A single accepted roll and what it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn counter at the time of the roll.
    pub turn: u32,
    /// Who rolled.
    pub player: PlayerId,
    /// The die face rolled.
    pub roll: Roll,
    /// What the engine resolved.
    pub outcome: RollOutcome,
}

impl TurnRecord {
    /// Create a record.
    #[must_use]
    pub fn new(turn: u32, player: PlayerId, roll: Roll, outcome: RollOutcome) -> Self {
        Self {
            turn,
            player,
            roll,
            outcome,
        }
    }

    /// Render the move as table talk, given the roller's display name.
    #[must_use]
    pub fn summary(&self, name: &str) -> String {
        match self.outcome {
            RollOutcome::Overshoot { required } => format!(
                "Wait! {name} needed exactly {required} but rolled {}.",
                self.roll
            ),
            RollOutcome::Advanced {
                final_position,
                transition: Some(Transition::SnakeSlide),
                ..
            } => format!("Ouch! A snake slithered {name} back to {final_position}!"),
            RollOutcome::Advanced {
                final_position,
                transition: Some(Transition::LadderClimb),
                ..
            } => format!("Luck! {name} discovered a ladder to {final_position}!"),
            RollOutcome::Advanced { final_position, .. } => {
                format!("{name} advances to square {final_position}")
            }
            RollOutcome::Win { .. } => format!("{name} reaches square 100 and wins the game!"),
        }
    }
}
