//! Dice: validated roll values and the deterministic roller.
//!
//! The engine never rolls for itself; the UI collaborator supplies one
//! `Roll` per turn. `DiceRoller` is that collaborator: a seeded ChaCha8
//! stream, so tests and replays reproduce exact games.
//!
//! ```
//! use snakes_ladders::DiceRoller;
//!
//! let mut a = DiceRoller::new(42);
//! let mut b = DiceRoller::new(42);
//!
//! // Same seed, same sequence.
//! for _ in 0..20 {
//!     assert_eq!(a.roll(), b.roll());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A die face, 1 through 6.
///
/// Constructing a `Roll` is the boundary where raw input is checked;
/// past it, the engine and session operate on proven-valid values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Roll(u8);

impl Roll {
    /// The lowest face.
    pub const MIN: Roll = Roll(1);

    /// The highest face.
    pub const MAX: Roll = Roll(6);

    /// Validate a raw die value.
    pub fn new(value: u8) -> Result<Self, GameError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GameError::InvalidRoll(value))
        }
    }

    /// Get the face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Roll {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Uniform six-sided die backed by a deterministic ChaCha8 stream.
///
/// Seed it explicitly for reproducible games, or from entropy for play.
#[derive(Clone, Debug)]
pub struct DiceRoller {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRoller {
    /// Create a roller with the given seed. Same seed, same sequence.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a roller seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this roller was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll the die: a uniform face in 1..=6.
    pub fn roll(&mut self) -> Roll {
        Roll(self.inner.gen_range(Roll::MIN.0..=Roll::MAX.0))
    }
}
