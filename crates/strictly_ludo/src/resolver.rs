//! Move legality and resolution.
//!
//! A coin in its yard enters at path index 0 (its owner's START cell); a
//! coin on the path advances by the die value. A coin may never pass its
//! FINISH cell: a move whose destination index reaches the path length is
//! an overshoot and is not playable.

use crate::action::{Capture, MoveError, MoveOutcome};
use crate::coin::CoinId;
use crate::queries::{all_coins_finished, coin_path_index};
use crate::rules::RuleSet;
use crate::state::GameState;
use crate::types::{CellType, DiceValue, PlayerId};
use tracing::{debug, info, instrument};

/// Path index `coin` would reach with `dice`.
///
/// # Errors
///
/// - `YardLocked` if the coin is in its yard and the rules keep it there
/// - `Overshoot` if the move would pass FINISH
/// - `OffPath` if the coin stands somewhere its path never visits
pub fn destination_index(
    state: &GameState,
    rules: &RuleSet,
    coin: CoinId,
    dice: DiceValue,
) -> Result<usize, MoveError> {
    let current = state.coin(coin);
    if current.is_at_origin() {
        return if rules.yard_release.allows(dice) {
            Ok(0)
        } else {
            Err(MoveError::YardLocked(coin, dice))
        };
    }

    let index = coin_path_index(state, coin)
        .ok_or(MoveError::OffPath(coin, *current.position()))?;
    let len = state.paths().get(coin.player()).len();
    let target = index + dice.steps();
    if target >= len {
        return Err(MoveError::Overshoot { coin, index: target, len });
    }
    Ok(target)
}

/// Whether `coin` has a legal move for `dice`.
pub fn is_coin_playable(state: &GameState, rules: &RuleSet, coin: CoinId, dice: DiceValue) -> bool {
    destination_index(state, rules, coin, dice).is_ok()
}

/// Coins of `player` that can legally move with `dice`, in slot order.
#[instrument(skip(state, rules, dice), fields(dice = dice.get()))]
pub fn playable_coins(
    state: &GameState,
    rules: &RuleSet,
    player: PlayerId,
    dice: DiceValue,
) -> Vec<CoinId> {
    let playable: Vec<CoinId> = CoinId::all_for(player)
        .filter(|coin| is_coin_playable(state, rules, *coin, dice))
        .collect();
    debug!(count = playable.len(), "Playable coins");
    playable
}

/// Moves `coin` by `dice`, capturing and detecting a win.
///
/// On error the state is untouched.
///
/// # Panics
///
/// Debug builds panic on an overshoot; callers are expected to move only
/// coins reported by [`playable_coins`].
#[instrument(skip_all, fields(coin = %coin, dice = dice.get()))]
pub fn resolve_move(
    state: &mut GameState,
    rules: &RuleSet,
    coin: CoinId,
    dice: DiceValue,
) -> Result<MoveOutcome, MoveError> {
    let target = destination_index(state, rules, coin, dice);
    debug_assert!(
        !matches!(target, Err(MoveError::Overshoot { .. })),
        "overshoot reached the resolver: {:?}",
        target
    );
    let target = target?;

    let player = coin.player();
    let from = *state.coin(coin).position();
    let to = state
        .paths()
        .get(player)
        .position_at(target)
        .ok_or(MoveError::Overshoot {
            coin,
            index: target,
            len: state.paths().get(player).len(),
        })?;

    state.relocate(coin, to);
    let landing = *state.board().cell(to).kind();
    debug!(%from, %to, index = target, ?landing, "Coin moved");

    let mut captures = Vec::new();
    if rules.capture_enabled && !landing.is_protected() {
        let victims: Vec<CoinId> = state.board().cell(to).opponents_of(player).collect();
        for victim in victims {
            let origin = *state.coin(victim).origin();
            state.relocate(victim, origin);
            info!(captured = %victim, by = %coin, at = %to, "Coin captured");
            captures.push(Capture {
                coin: victim,
                from: to,
                to: origin,
            });
        }
    }

    let won = landing == CellType::Finish && all_coins_finished(state, player);
    let bonus_turn = !won && rules.grants_bonus(dice, landing);

    Ok(MoveOutcome::new(
        coin, dice, from, to, target, landing, captures, won, bonus_turn,
    ))
}
