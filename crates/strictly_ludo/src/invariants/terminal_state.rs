//! Player states agree with the board and with each other.

use super::Invariant;
use crate::queries::all_coins_finished;
use crate::state::GameState;
use crate::types::PlayerState;
use tracing::warn;

/// Invariant: terminal states are earned and at most one player is active.
///
/// - `Won` exactly when all four coins are on FINISH
/// - `Lost` only when every other player has `Won`
/// - every player other than the current one is `Inactive` or terminal
pub struct TerminalStateInvariant;

impl Invariant<GameState> for TerminalStateInvariant {
    fn holds(state: &GameState) -> bool {
        let current = *state.current_player().id();
        state.players().iter().all(|player| {
            let id = *player.id();
            let state_ok = match player.state() {
                PlayerState::Won => all_coins_finished(state, id),
                PlayerState::Lost => id
                    .others()
                    .all(|o| *state.player(o).state() == PlayerState::Won),
                PlayerState::Inactive => !all_coins_finished(state, id),
                _ => id == current && !all_coins_finished(state, id),
            };
            if !state_ok {
                warn!(player = ?id, state = ?player.state(), "Terminal state violated");
            }
            state_ok
        })
    }

    fn description() -> &'static str {
        "Won iff all coins finished, Lost only after all others won, one active player"
    }
}
