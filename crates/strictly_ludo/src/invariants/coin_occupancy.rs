//! Every coin stands in exactly one cell, and that cell is where the coin
//! thinks it is.

use super::Invariant;
use crate::state::GameState;
use crate::types::{COINS_PER_PLAYER, PLAYER_COUNT};
use tracing::warn;

/// Invariant: cell occupancy and coin positions agree.
///
/// - each coin is listed by the cell at its position
/// - no cell lists a coin standing elsewhere
/// - each coin is at its origin or on its owner's path
pub struct CoinOccupancyInvariant;

impl Invariant<GameState> for CoinOccupancyInvariant {
    fn holds(state: &GameState) -> bool {
        let listed: usize = state.board().cells().iter().map(|c| c.coins().len()).sum();
        if listed != PLAYER_COUNT * COINS_PER_PLAYER {
            warn!(listed, "Occupancy lists disagree with coin count");
            return false;
        }

        let board_agrees = state.board().cells().iter().all(|cell| {
            cell.coins()
                .iter()
                .all(|id| state.coin(*id).position() == cell.position())
        });

        let coins_agree = state.coins().iter().all(|coin| {
            let pos = *coin.position();
            state.board().cell(pos).holds(*coin.id())
                && (coin.is_at_origin() || state.paths().get(coin.player()).index_of(pos).is_some())
        });

        let valid = board_agrees && coins_agree;
        if !valid {
            warn!(board_agrees, coins_agree, "Coin occupancy violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Every coin occupies exactly the cell at its position, on its path or in its yard"
    }
}
