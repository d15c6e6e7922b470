//! Player identity and presentation tokens.
//!
//! ## PlayerId
//!
//! Type-safe 0-based player identifier. Seat order is turn order, fixed
//! when the session is created.
//!
//! ## PlayerToken
//!
//! The color/avatar pair a board renderer draws. Inert data here: the
//! engine never reads it.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Player identifier, 0-based within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count`.
    ///
    /// ```
    /// use snakes_ladders::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Token colors assigned to seats 0..=3, as CSS hex strings.
pub const TOKEN_COLORS: [&str; 4] = ["#ef4444", "#3b82f6", "#10b981", "#f59e0b"];

/// Avatar glyphs cycled across seats.
pub const TOKEN_AVATARS: [&str; 8] = ["👑", "🛡️", "⚔️", "🔮", "🏹", "🐉", "🧙", "🧝"];

/// Visual identity drawn by the board renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerToken {
    /// CSS hex color for the token background.
    pub color: String,
    /// Glyph drawn inside the token.
    pub avatar: String,
}

impl PlayerToken {
    /// The token for a seat: colors are per-seat, avatars cycle.
    #[must_use]
    pub fn for_seat(seat: usize) -> Self {
        Self {
            color: TOKEN_COLORS[seat % TOKEN_COLORS.len()].to_owned(),
            avatar: TOKEN_AVATARS[seat % TOKEN_AVATARS.len()].to_owned(),
        }
    }
}

/// A seated player: identity, display name, position, and token.
///
/// Owned exclusively by the session; the position moves only when a turn
/// is applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identity; doubles as the seat and turn-order index.
    pub id: PlayerId,
    /// Display name shown by the UI.
    pub name: String,
    /// Current square. Everyone starts on square 1.
    pub position: Cell,
    /// Presentation-only color/avatar pair.
    pub token: PlayerToken,
}

impl Player {
    /// Seat a player on square 1 with the token for their seat.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: Cell::FIRST,
            token: PlayerToken::for_seat(id.index()),
        }
    }

    /// Has this player reached square 100?
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.position == Cell::LAST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p2 = PlayerId::new(2);
        assert_eq!(p2.index(), 2);
        assert_eq!(format!("{}", p2), "Player 2");
    }

    #[test]
    fn test_player_id_all() {
        let seats: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_new_player_starts_on_square_one() {
        let player = Player::new(PlayerId::new(0), "Asha");
        assert_eq!(player.position, Cell::FIRST);
        assert_eq!(player.name, "Asha");
        assert!(!player.has_finished());
    }

    #[test]
    fn test_tokens_are_distinct_across_seats() {
        let tokens: Vec<_> = (0..4).map(PlayerToken::for_seat).collect();
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(tokens[i].color, tokens[j].color);
                assert_ne!(tokens[i].avatar, tokens[j].avatar);
            }
        }
    }

    #[test]
    fn test_token_color_matches_seat() {
        assert_eq!(PlayerToken::for_seat(0).color, TOKEN_COLORS[0]);
        assert_eq!(PlayerToken::for_seat(3).color, TOKEN_COLORS[3]);
    }

    #[test]
    fn test_has_finished() {
        let mut player = Player::new(PlayerId::new(1), "Brooke");
        player.position = Cell::LAST;
        assert!(player.has_finished());
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(0), "Asha");
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, back);
    }
}
