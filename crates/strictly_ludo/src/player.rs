//! Players and their turn state.

use crate::types::{PlayerId, PlayerState};
use derive_getters::Getters;
use serde::Serialize;

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct Player {
    /// Seat.
    id: PlayerId,
    /// Turn lifecycle state.
    state: PlayerState,
    /// Whether the latest roll gave this player a legal move.
    has_moves: bool,
}

impl Player {
    /// Creates a player waiting for its turn.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            state: PlayerState::Inactive,
            has_moves: false,
        }
    }

    /// `Won` or `Lost`.
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub(crate) fn set_state(&mut self, state: PlayerState) {
        self.state = state;
    }

    pub(crate) fn set_has_moves(&mut self, has_moves: bool) {
        self.has_moves = has_moves;
    }
}
