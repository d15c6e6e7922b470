//! Special tiles: the snakes and ladders themselves.
//!
//! The standard table is the classic 10x10 layout: 11 ladders and 10
//! snakes. It is fixed content; `Board` owns lookup and validation.

use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// What kind of transition a special tile applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Moves the player backward (head at `start`, tail at `end`).
    Snake,
    /// Moves the player forward (foot at `start`, top at `end`).
    Ladder,
}

/// A single snake or ladder: landing exactly on `start` relocates to `end`.
///
/// A tile's `end` square triggers nothing by itself; lookup is always by
/// `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecialTile {
    /// Triggering square.
    pub start: Cell,
    /// Destination square.
    pub end: Cell,
    /// Snake or ladder.
    pub kind: TileKind,
}

impl SpecialTile {
    /// A snake with its head on `start`, sliding down to `end`.
    #[must_use]
    pub const fn snake(start: u8, end: u8) -> Self {
        assert!(end < start, "a snake slides downward");
        Self {
            start: Cell::new(start),
            end: Cell::new(end),
            kind: TileKind::Snake,
        }
    }

    /// A ladder climbing from `start` up to `end`.
    #[must_use]
    pub const fn ladder(start: u8, end: u8) -> Self {
        assert!(end > start, "a ladder climbs upward");
        Self {
            start: Cell::new(start),
            end: Cell::new(end),
            kind: TileKind::Ladder,
        }
    }
}

/// The standard board: 11 ladders and 10 snakes, ordered by start square.
pub const STANDARD_TILES: [SpecialTile; 21] = [
    SpecialTile::ladder(2, 38),
    SpecialTile::ladder(7, 14),
    SpecialTile::ladder(8, 31),
    SpecialTile::ladder(15, 26),
    SpecialTile::snake(16, 6),
    SpecialTile::ladder(21, 42),
    SpecialTile::ladder(28, 84),
    SpecialTile::ladder(36, 44),
    SpecialTile::snake(46, 25),
    SpecialTile::snake(49, 11),
    SpecialTile::ladder(51, 67),
    SpecialTile::snake(62, 19),
    SpecialTile::snake(64, 60),
    SpecialTile::ladder(71, 91),
    SpecialTile::snake(74, 53),
    SpecialTile::ladder(78, 98),
    SpecialTile::ladder(87, 94),
    SpecialTile::snake(89, 68),
    SpecialTile::snake(92, 88),
    SpecialTile::snake(95, 75),
    SpecialTile::snake(99, 80),
];
