//! The aggregate game state.

use crate::board::Board;
use crate::coin::{Coin, CoinId};
use crate::dice::DiceState;
use crate::error::ConfigError;
use crate::path::PlayerPaths;
use crate::player::Player;
use crate::types::{PLAYER_COUNT, PlayerId, PlayerState, Position};
use serde::Serialize;
use tracing::instrument;

/// Everything a game knows, in one place.
///
/// The board and paths are fixed once built. The turn machine owns
/// `current_player_index` and every `Player::state`; the move resolver owns
/// coin positions and cell occupancy. Readers (renderers, tests) only ever
/// see `&GameState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) current_player_index: usize,
    pub(crate) players: [Player; PLAYER_COUNT],
    pub(crate) board: Board,
    pub(crate) coins: Vec<Coin>,
    pub(crate) paths: PlayerPaths,
    pub(crate) dice: DiceState,
    pub(crate) started: bool,
    pub(crate) standings: Vec<PlayerId>,
}

impl GameState {
    /// Builds the starting configuration: every coin in its yard, Red to
    /// move, nobody active yet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the board layout is malformed.
    #[instrument]
    pub fn new() -> Result<Self, ConfigError> {
        let (board, coins) = Board::build()?;
        Ok(Self {
            current_player_index: 0,
            players: PlayerId::ALL.map(Player::new),
            board,
            coins,
            paths: PlayerPaths::generate(),
            dice: DiceState::new(),
            started: false,
            standings: Vec::new(),
        })
    }

    /// Seat index of the player whose turn it is.
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// All players in turn order.
    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    /// One player.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All 16 coins, player-major.
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// One coin.
    pub fn coin(&self, id: CoinId) -> &Coin {
        &self.coins[id.index()]
    }

    /// All four paths.
    pub fn paths(&self) -> &PlayerPaths {
        &self.paths
    }

    /// The die.
    pub fn dice(&self) -> &DiceState {
        &self.dice
    }

    /// Whether anyone has rolled yet.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Players in the order they won.
    pub fn standings(&self) -> &[PlayerId] {
        &self.standings
    }

    /// True once no player can take another turn.
    pub fn is_over(&self) -> bool {
        self.players.iter().all(Player::is_finished)
    }

    pub(crate) fn set_player_state(&mut self, id: PlayerId, state: PlayerState) {
        self.players[id.index()].set_state(state);
    }

    /// Moves a coin between cells, keeping occupancy and position in step.
    pub(crate) fn relocate(&mut self, id: CoinId, to: Position) {
        let from = *self.coins[id.index()].position();
        let removed = self.board.cell_mut(from).remove(id);
        debug_assert!(removed, "{id} missing from its own cell {from}");
        self.board.cell_mut(to).insert(id);
        self.coins[id.index()].set_position(to);
    }
}
