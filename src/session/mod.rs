//! Game sessions: roster, turn pointer, winner, and history.
//!
//! The session is the only mutable piece of the crate. It owns its
//! players exclusively, delegates every roll to the pure engine, and
//! applies the outcome under `&mut self`.

pub mod game;
pub mod log;

pub use game::{GameSession, SessionStatus, MAX_PLAYERS, MIN_PLAYERS};
pub use log::TurnRecord;
