//! Core value types: board squares, dice, player identity.
//!
//! These are the vocabulary the rest of the crate speaks. Invariants
//! (cell range, die faces) are enforced at construction so the engine
//! and session never re-check them.

pub mod cell;
pub mod dice;
pub mod player;

pub use cell::Cell;
pub use dice::{DiceRoller, Roll};
pub use player::{Player, PlayerId, PlayerToken, TOKEN_AVATARS, TOKEN_COLORS};
