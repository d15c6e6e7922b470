//! # snakes-ladders
//!
//! A deterministic turn-resolution engine for 2-4 player Snakes & Ladders
//! on the standard 100-square board.
//!
//! ## Design Principles
//!
//! 1. **Pure resolution**: `resolve_roll` is a function of (position,
//!    roll) with no side effects and no randomness. The dice value always
//!    comes from the caller.
//!
//! 2. **Exclusive ownership**: a `GameSession` is a plain value; turns
//!    mutate it through `&mut self` only, so the borrow checker enforces
//!    one turn in flight per session.
//!
//! 3. **Presentation stays outside**: rendering, sound, theming, and
//!    animation pacing consume the engine's outcome values. Nothing in
//!    here waits, draws, or times anything.
//!
//! ## Modules
//!
//! - `core`: board squares, dice, player identity
//! - `board`: the fixed snake/ladder table and grid geometry
//! - `engine`: pure roll resolution
//! - `session`: roster, turn order, win state, history
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::{DiceRoller, GameSession, SessionStatus};
//!
//! let mut session = GameSession::new(2)?;
//! let mut dice = DiceRoller::new(7);
//!
//! while session.status() == SessionStatus::Active {
//!     session.take_turn(dice.roll())?;
//! }
//!
//! assert!(session.winner().is_some());
//! # Ok::<(), snakes_ladders::GameError>(())
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use crate::board::{cell_at, grid_pos, Board, GridPos, SpecialTile, TileKind, STANDARD_TILES};
pub use crate::core::{
    Cell, DiceRoller, Player, PlayerId, PlayerToken, Roll, TOKEN_AVATARS, TOKEN_COLORS,
};
pub use crate::engine::{resolve_roll, RollOutcome, Transition};
pub use crate::error::GameError;
pub use crate::session::{GameSession, SessionStatus, TurnRecord, MAX_PLAYERS, MIN_PLAYERS};
