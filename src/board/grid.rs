//! Boustrophedon grid geometry for the rendering collaborator.
//!
//! Squares number 1..=100 from the bottom-left corner: even rows (0-based
//! from the bottom) run left to right, odd rows right to left. The engine
//! never consults geometry; renderers use it to place cells and draw
//! snake and ladder paths.

use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// Grid coordinates: row 0 is the bottom row, column 0 the left column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    /// Row from the bottom, 0..=9.
    pub row: u8,
    /// Column from the left, 0..=9.
    pub col: u8,
}

/// Map a square to its grid position.
///
/// ```
/// use snakes_ladders::{grid_pos, Cell};
///
/// // Row 1 runs right to left, so square 11 sits at the right edge.
/// let pos = grid_pos(Cell::new(11));
/// assert_eq!((pos.row, pos.col), (1, 9));
/// ```
#[must_use]
pub fn grid_pos(cell: Cell) -> GridPos {
    let zero = cell.number() - 1;
    let row = zero / 10;
    let col = if row % 2 == 0 { zero % 10 } else { 9 - zero % 10 };
    GridPos { row, col }
}

/// Map a grid position back to its square. Panics off the 10x10 board.
#[must_use]
pub fn cell_at(row: u8, col: u8) -> Cell {
    assert!(row < 10 && col < 10, "the board is 10x10");
    let offset = if row % 2 == 0 { col } else { 9 - col };
    Cell::new(row * 10 + offset + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_squares() {
        assert_eq!(grid_pos(Cell::FIRST), GridPos { row: 0, col: 0 });
        assert_eq!(grid_pos(Cell::new(10)), GridPos { row: 0, col: 9 });
        assert_eq!(grid_pos(Cell::new(91)), GridPos { row: 9, col: 9 });
        assert_eq!(grid_pos(Cell::LAST), GridPos { row: 9, col: 0 });
    }

    #[test]
    fn test_rows_alternate_direction() {
        // 11 continues directly above 10, then runs leftward.
        assert_eq!(grid_pos(Cell::new(11)), GridPos { row: 1, col: 9 });
        assert_eq!(grid_pos(Cell::new(20)), GridPos { row: 1, col: 0 });
        assert_eq!(grid_pos(Cell::new(21)), GridPos { row: 2, col: 0 });
    }

    #[test]
    fn test_round_trip_covers_the_board() {
        for n in 1..=100 {
            let cell = Cell::new(n);
            let pos = grid_pos(cell);
            assert_eq!(cell_at(pos.row, pos.col), cell);
        }
    }

    #[test]
    #[should_panic(expected = "the board is 10x10")]
    fn test_off_board_position_rejected() {
        let _ = cell_at(10, 0);
    }
}
