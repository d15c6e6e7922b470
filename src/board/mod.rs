//! Board definition: the fixed special-tile table and its lookup.
//!
//! ## Board
//!
//! An immutable tile table indexed by start square. The standard board is
//! built once at process start and shared read-only by every session via
//! `Board::standard()`. Custom boards exist only as an engine test seam;
//! sessions always play the standard one.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::core::Cell;

pub mod grid;
pub mod tiles;

pub use grid::{cell_at, grid_pos, GridPos};
pub use tiles::{SpecialTile, TileKind, STANDARD_TILES};

/// An immutable snakes-and-ladders table with O(1) lookup by start square.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<SpecialTile>,
    by_start: FxHashMap<Cell, usize>,
}

impl Board {
    /// Build a board from a tile list.
    ///
    /// Asserts the table invariants: at most one tile per start square,
    /// and no tile starting on square 1 or 100.
    #[must_use]
    pub fn new(tiles: impl IntoIterator<Item = SpecialTile>) -> Self {
        let tiles: Vec<SpecialTile> = tiles.into_iter().collect();
        let mut by_start = FxHashMap::default();
        by_start.reserve(tiles.len());

        for (i, tile) in tiles.iter().enumerate() {
            assert!(
                tile.start != Cell::FIRST && tile.start != Cell::LAST,
                "no tile may start on square 1 or 100"
            );
            let previous = by_start.insert(tile.start, i);
            assert!(previous.is_none(), "duplicate tile start at square {}", tile.start);
        }

        Self { tiles, by_start }
    }

    /// The standard 11-ladder, 10-snake board.
    #[must_use]
    pub fn standard() -> &'static Board {
        static STANDARD: OnceLock<Board> = OnceLock::new();
        STANDARD.get_or_init(|| Board::new(STANDARD_TILES))
    }

    /// Look up the tile triggered by landing on `cell`, if any.
    ///
    /// Lookup is by start square only; landing on a tile's end square
    /// triggers nothing.
    #[must_use]
    pub fn lookup(&self, cell: Cell) -> Option<&SpecialTile> {
        self.by_start.get(&cell).map(|&i| &self.tiles[i])
    }

    /// All tiles, in table order.
    pub fn tiles(&self) -> impl Iterator<Item = &SpecialTile> {
        self.tiles.iter()
    }

    /// All snakes, for drawing their paths.
    pub fn snakes(&self) -> impl Iterator<Item = &SpecialTile> {
        self.tiles.iter().filter(|t| t.kind == TileKind::Snake)
    }

    /// All ladders, for drawing their paths.
    pub fn ladders(&self) -> impl Iterator<Item = &SpecialTile> {
        self.tiles.iter().filter(|t| t.kind == TileKind::Ladder)
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_lookup() {
        let board = Board::standard();

        let ladder = board.lookup(Cell::new(2)).unwrap();
        assert_eq!(ladder.end, Cell::new(38));
        assert_eq!(ladder.kind, TileKind::Ladder);

        let snake = board.lookup(Cell::new(16)).unwrap();
        assert_eq!(snake.end, Cell::new(6));
        assert_eq!(snake.kind, TileKind::Snake);
    }

    #[test]
    fn test_lookup_is_by_start_not_end() {
        let board = Board::standard();

        // 98 is the top of the 78 -> 98 ladder, but no tile starts there.
        assert!(board.lookup(Cell::new(98)).is_none());
        // 6 is the tail of the 16 -> 6 snake.
        assert!(board.lookup(Cell::new(6)).is_none());
    }

    #[test]
    fn test_plain_squares_have_no_tile() {
        let board = Board::standard();
        for n in [1, 3, 50, 100] {
            assert!(board.lookup(Cell::new(n)).is_none());
        }
    }

    #[test]
    fn test_standard_board_counts() {
        let board = Board::standard();
        assert_eq!(board.tile_count(), 21);
        assert_eq!(board.snakes().count(), 10);
        assert_eq!(board.ladders().count(), 11);
    }

    #[test]
    fn test_standard_board_is_shared() {
        assert!(std::ptr::eq(Board::standard(), Board::standard()));
    }

    #[test]
    fn test_every_standard_tile_is_indexed() {
        let board = Board::standard();
        for tile in &STANDARD_TILES {
            assert_eq!(board.lookup(tile.start), Some(tile));
        }
    }

    #[test]
    #[should_panic(expected = "duplicate tile start")]
    fn test_duplicate_starts_rejected() {
        let _ = Board::new([SpecialTile::ladder(5, 20), SpecialTile::snake(5, 2)]);
    }

    #[test]
    #[should_panic(expected = "no tile may start on square 1 or 100")]
    fn test_tile_on_first_square_rejected() {
        let _ = Board::new([SpecialTile::ladder(1, 10)]);
    }
}
