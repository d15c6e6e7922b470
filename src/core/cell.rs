//! Board positions.
//!
//! A `Cell` is one square of the fixed 10x10 board, numbered 1 through
//! 100. The range invariant is enforced at construction, so everything
//! downstream operates on proven-valid positions.

use serde::{Deserialize, Serialize};

use super::dice::Roll;

/// A board square, numbered 1 through 100.
///
/// Square 1 is where every player starts; square 100 wins the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell(u8);

impl Cell {
    /// The starting square.
    pub const FIRST: Cell = Cell(1);

    /// The winning square.
    pub const LAST: Cell = Cell(100);

    /// Create a cell, panicking if `number` is outside 1..=100.
    ///
    /// Usable in const contexts; the standard tile table is built from it.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        assert!(number >= 1 && number <= 100, "cell numbers run 1..=100");
        Self(number)
    }

    /// Get the raw square number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The square a roll carries to, or `None` if it would pass square 100.
    #[must_use]
    pub fn advance(self, roll: Roll) -> Option<Cell> {
        let target = self.0 + roll.value();
        (target <= Self::LAST.0).then_some(Cell(target))
    }

    /// Exact steps remaining to square 100.
    #[must_use]
    pub const fn steps_to_finish(self) -> u8 {
        Self::LAST.0 - self.0
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
