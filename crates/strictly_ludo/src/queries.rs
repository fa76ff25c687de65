//! Read-only lookups over a [`GameState`].
//!
//! Every function here is total for any coin or player in a valid state.

use crate::board::Cell;
use crate::coin::{Coin, CoinId};
use crate::state::GameState;
use crate::types::{CellType, PlayerId, Position};

/// Cell the coin stands on.
pub fn coin_cell(state: &GameState, coin: CoinId) -> &Cell {
    state.board().cell(*state.coin(coin).position())
}

/// Index of the coin on its owner's path, `None` while it is in the yard.
pub fn coin_path_index(state: &GameState, coin: CoinId) -> Option<usize> {
    path_index_of(state, coin.player(), *state.coin(coin).position())
}

/// Yard cell the coin started on and returns to when captured.
pub fn coin_origin_cell(state: &GameState, coin: CoinId) -> &Cell {
    state.board().cell(*state.coin(coin).origin())
}

/// The four coins owned by `player`.
pub fn player_coins(state: &GameState, player: PlayerId) -> impl Iterator<Item = &Coin> {
    CoinId::all_for(player).map(move |id| state.coin(id))
}

/// Coins of the player whose turn it is.
pub fn current_player_coins(state: &GameState) -> impl Iterator<Item = &Coin> {
    player_coins(state, *state.current_player().id())
}

/// Index of `position` on `player`'s path.
pub fn path_index_of(state: &GameState, player: PlayerId, position: Position) -> Option<usize> {
    state.paths().get(player).index_of(position)
}

/// Cell at `index` on `player`'s path, `None` past FINISH.
pub fn path_cell(state: &GameState, player: PlayerId, index: usize) -> Option<&Cell> {
    state
        .paths()
        .get(player)
        .position_at(index)
        .map(|p| state.board().cell(p))
}

/// Whether the coin stands on a FINISH cell.
pub fn is_coin_finished(state: &GameState, coin: CoinId) -> bool {
    *coin_cell(state, coin).kind() == CellType::Finish
}

/// Number of `player`'s coins on FINISH cells.
pub fn finished_coin_count(state: &GameState, player: PlayerId) -> usize {
    CoinId::all_for(player)
        .filter(|id| is_coin_finished(state, *id))
        .count()
}

/// All four of `player`'s coins are on FINISH cells.
pub fn all_coins_finished(state: &GameState, player: PlayerId) -> bool {
    CoinId::all_for(player).all(|id| is_coin_finished(state, id))
}

/// Coins of `player` standing on the cell at `position`.
///
/// An off-board position holds nothing.
pub fn player_coins_at(state: &GameState, player: PlayerId, position: Position) -> Vec<CoinId> {
    state
        .board()
        .get(position)
        .map(|cell| {
            cell.coins()
                .iter()
                .copied()
                .filter(|c| c.player() == player)
                .collect()
        })
        .unwrap_or_default()
}
