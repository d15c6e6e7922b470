//! Crate-wide error type.
//!
//! Every failure here is a caller programming error (a precondition the
//! caller can always check up front), not a transient runtime fault.
//! There is no retry story; a UI layer prevents all of these by disabling
//! invalid inputs.

use thiserror::Error;

/// Errors surfaced by session creation and turn handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Session creation was asked for a table size the board can't seat.
    #[error("player count {0} is out of range (a game seats 2 to 4)")]
    InvalidPlayerCount(usize),

    /// A turn was submitted after the game already produced a winner.
    #[error("the session already has a winner and accepts no further turns")]
    SessionTerminated,

    /// A raw die value outside 1-6 reached the `Roll` boundary.
    #[error("die value {0} is not a face of a six-sided die")]
    InvalidRoll(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::InvalidPlayerCount(7).to_string(),
            "player count 7 is out of range (a game seats 2 to 4)"
        );
        assert_eq!(
            GameError::InvalidRoll(0).to_string(),
            "die value 0 is not a face of a six-sided die"
        );
        assert!(GameError::SessionTerminated.to_string().contains("winner"));
    }
}
