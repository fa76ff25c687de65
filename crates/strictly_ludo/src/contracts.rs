//! Pre- and postconditions for coin moves.
//!
//! Preconditions are always checked before a move is resolved.
//! Postconditions re-check every invariant and run in debug builds only.

use crate::action::MoveError;
use crate::coin::CoinId;
use crate::invariants::violations_of;
use crate::resolver::destination_index;
use crate::rules::RuleSet;
use crate::state::GameState;
use crate::types::DiceValue;
use derive_more::Display;
use serde::Serialize;
use tracing::{instrument, warn};

/// A move about to be attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, derive_new::new)]
#[display("{} by {}", coin, dice)]
pub struct CoinMove {
    /// Coin to move.
    pub coin: CoinId,
    /// Roll driving it.
    pub dice: DiceValue,
}

/// Conditions around a state transition.
pub trait Contract<S, A> {
    /// Must hold before `action` is applied.
    fn pre(state: &S, rules: &RuleSet, action: &A) -> Result<(), MoveError>;

    /// Must hold after the transition.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the coin belongs to the player on turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks ownership.
    #[instrument(skip(state))]
    pub fn check(action: &CoinMove, state: &GameState) -> Result<(), MoveError> {
        let current = *state.current_player().id();
        if action.coin.player() != current {
            Err(MoveError::WrongPlayer(action.coin.player()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the coin has a legal destination.
pub struct CoinPlayable;

impl CoinPlayable {
    /// Checks the destination.
    #[instrument(skip(state, rules))]
    pub fn check(action: &CoinMove, state: &GameState, rules: &RuleSet) -> Result<(), MoveError> {
        destination_index(state, rules, action.coin, action.dice).map(|_| ())
    }
}

/// Contract for a single coin move.
pub struct MoveContract;

impl Contract<GameState, CoinMove> for MoveContract {
    fn pre(state: &GameState, rules: &RuleSet, action: &CoinMove) -> Result<(), MoveError> {
        PlayersTurn::check(action, state)?;
        CoinPlayable::check(action, state, rules)?;
        Ok(())
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        match violations_of(after) {
            None => Ok(()),
            Some(descriptions) => {
                warn!(%descriptions, "Postcondition failed");
                Err(MoveError::InvariantViolation(format!(
                    "Postcondition failed: {}",
                    descriptions
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlayerId, PlayerState, Position};

    fn red_move(slot: u8, dice: u8) -> CoinMove {
        CoinMove::new(
            CoinId::new(PlayerId::Red, slot).unwrap(),
            DiceValue::new(dice).unwrap(),
        )
    }

    #[test]
    fn test_pre_accepts_current_players_coin() {
        let state = GameState::new().unwrap();
        assert!(MoveContract::pre(&state, &RuleSet::default(), &red_move(0, 4)).is_ok());
    }

    #[test]
    fn test_pre_rejects_other_player() {
        let state = GameState::new().unwrap();
        let action = CoinMove::new(
            CoinId::new(PlayerId::Blue, 0).unwrap(),
            DiceValue::new(4).unwrap(),
        );
        assert_eq!(
            MoveContract::pre(&state, &RuleSet::default(), &action),
            Err(MoveError::WrongPlayer(PlayerId::Blue))
        );
    }

    #[test]
    fn test_pre_rejects_locked_yard() {
        let state = GameState::new().unwrap();
        assert!(matches!(
            MoveContract::pre(&state, &RuleSet::traditional(), &red_move(0, 4)),
            Err(MoveError::YardLocked(..))
        ));
    }

    #[test]
    fn test_post_detects_corruption() {
        let before = GameState::new().unwrap();
        let mut after = before.clone();
        assert!(MoveContract::post(&before, &after).is_ok());

        after.set_player_state(PlayerId::Yellow, PlayerState::Won);
        after.relocate(CoinId::new(PlayerId::Red, 0).unwrap(), Position::new(6, 1));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_coin_move_display() {
        assert_eq!(red_move(2, 5).to_string(), "Red#2 by 5");
    }
}
