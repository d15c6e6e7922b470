//! Game sessions: roster, turn order, and win state.
//!
//! ## Ownership
//!
//! A session is a plain value owned by its caller; `take_turn` takes
//! `&mut self`, so the borrow checker serializes turn handling — exactly
//! one turn can be in flight. Cloning is cheap (the log is persistent)
//! when a caller wants a snapshot.
//!
//! ## Lifecycle
//!
//! Created with 2-4 players all on square 1, `Active` until a roll
//! resolves to a win, then `Terminal` forever. Restarting means building
//! a fresh session; nothing survives across one.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Player, PlayerId, Roll};
use crate::engine::{resolve_roll, RollOutcome};
use crate::error::GameError;

use super::log::TurnRecord;

/// Minimum seats at the table.
pub const MIN_PLAYERS: usize = 2;

/// Maximum seats at the table.
pub const MAX_PLAYERS: usize = 4;

/// Session lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Turns are being accepted.
    Active,
    /// A winner exists; no further turns are accepted.
    Terminal,
}

/// A running game: the players, whose turn it is, and the winner if any.
///
/// Invariant: `winner` is `Some` exactly when some player stands on
/// square 100, and once set it never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    players: SmallVec<[Player; 4]>,
    current_turn: usize,
    winner: Option<PlayerId>,
    turn_number: u32,
    log: Vector<TurnRecord>,
}

impl GameSession {
    /// Create a session seating `player_count` default-named players.
    ///
    /// Fails with `InvalidPlayerCount` outside 2..=4. Everyone starts on
    /// square 1 and seat 0 rolls first.
    pub fn new(player_count: usize) -> Result<Self, GameError> {
        Self::with_names((1..=player_count).map(|n| format!("Hero {n}")))
    }

    /// Create a session with caller-supplied display names, one per seat.
    ///
    /// Seat order (and thus turn order) follows iteration order. Fails
    /// with `InvalidPlayerCount` unless 2..=4 names are given.
    pub fn with_names<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: SmallVec<[Player; 4]> = names
            .into_iter()
            .enumerate()
            .map(|(seat, name)| Player::new(PlayerId::new(seat as u8), name))
            .collect();

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(GameError::InvalidPlayerCount(players.len()));
        }

        Ok(Self {
            players,
            current_turn: 0,
            winner: None,
            turn_number: 1,
            log: Vector::new(),
        })
    }

    /// The player whose turn it is (the winner, once terminal).
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    /// All players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The winner, once one exists.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    /// Lifecycle state: `Terminal` exactly when a winner exists.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.winner.is_some() {
            SessionStatus::Terminal
        } else {
            SessionStatus::Active
        }
    }

    /// 1-based count of the next turn; forfeited overshoots count too.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// History of every accepted roll, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<TurnRecord> {
        &self.log
    }

    /// Resolve and apply one roll for the current player.
    ///
    /// On `Overshoot` the position is untouched; on `Win` the session
    /// becomes terminal and the turn pointer stays on the winner;
    /// otherwise play passes to the next seat. Fails with
    /// `SessionTerminated` — touching nothing — once a winner exists.
    pub fn take_turn(&mut self, roll: Roll) -> Result<RollOutcome, GameError> {
        if self.winner.is_some() {
            return Err(GameError::SessionTerminated);
        }

        let seat = self.current_turn;
        let outcome = resolve_roll(Board::standard(), self.players[seat].position, roll);

        if let Some(position) = outcome.final_position() {
            self.players[seat].position = position;
        }
        if outcome.is_win() {
            self.winner = Some(self.players[seat].id);
        }

        self.log
            .push_back(TurnRecord::new(self.turn_number, self.players[seat].id, roll, outcome));
        self.turn_number += 1;

        if self.winner.is_none() {
            self.current_turn = (self.current_turn + 1) % self.players.len();
        }

        Ok(outcome)
    }

    /// Render a history record as table talk using the roster's names.
    #[must_use]
    pub fn narrate(&self, record: &TurnRecord) -> String {
        let name = self
            .player(record.player)
            .map_or("Unknown", |p| p.name.as_str());
        record.summary(name)
    }
}
