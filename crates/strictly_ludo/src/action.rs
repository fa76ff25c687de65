//! First-class stimulus and outcome types.
//!
//! The outside world drives a game with exactly two kinds of stimulus: a
//! roll request and a coin choice. Each is processed to completion and
//! answered with a [`TurnReport`] describing what happened.

use crate::coin::CoinId;
use crate::types::{CellType, DiceValue, PlayerId, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// An input from the player-facing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Stimulus {
    /// Roll the die.
    #[display("roll")]
    Roll,
    /// Move this coin.
    #[display("select {}", _0)]
    SelectCoin(CoinId),
    /// Move a coin standing on this cell.
    #[display("select cell {}", _0)]
    SelectCell(Position),
}

/// A coin sent back to its yard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capture {
    /// The captured coin.
    pub coin: CoinId,
    /// Where it was standing.
    pub from: Position,
    /// Its yard cell.
    pub to: Position,
}

/// Result of resolving one coin move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_new::new)]
pub struct MoveOutcome {
    /// The coin that moved.
    pub coin: CoinId,
    /// Roll that drove the move.
    pub dice: DiceValue,
    /// Cell left.
    pub from: Position,
    /// Cell reached.
    pub to: Position,
    /// Path index reached.
    pub to_index: usize,
    /// Type of the cell reached.
    pub landing: CellType,
    /// Opponents sent home.
    pub captures: Vec<Capture>,
    /// The mover now has all four coins on FINISH.
    pub won: bool,
    /// The mover rolls again.
    pub bonus_turn: bool,
}

impl MoveOutcome {
    /// Owner of the moved coin.
    pub fn player(&self) -> PlayerId {
        self.coin.player()
    }
}

/// What a stimulus did to the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TurnReport {
    /// The stimulus did not fit the current state and changed nothing.
    Ignored,
    /// The roll produced no legal move; the turn passed on.
    NoMoves {
        /// Who rolled.
        player: PlayerId,
        /// What they rolled.
        dice: DiceValue,
    },
    /// Several coins can move; one must be chosen.
    AwaitingSelection {
        /// Who rolled.
        player: PlayerId,
        /// What they rolled.
        dice: DiceValue,
        /// Coins that may be chosen.
        playable: Vec<CoinId>,
    },
    /// A coin moved, chosen explicitly or automatically.
    Moved(MoveOutcome),
}

impl TurnReport {
    /// Whether the stimulus was a no-op.
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    /// The move made, if any.
    pub fn outcome(&self) -> Option<&MoveOutcome> {
        match self {
            Self::Moved(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Why the resolver refused a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The coin would pass its FINISH cell.
    #[display("{} would overshoot FINISH: index {} on a path of {}", coin, index, len)]
    Overshoot {
        /// The coin.
        coin: CoinId,
        /// Index it would reach.
        index: usize,
        /// Path length.
        len: usize,
    },

    /// The coin is in the yard and the roll does not release it.
    #[display("{} cannot leave the yard on a {}", _0, _1)]
    YardLocked(CoinId, DiceValue),

    /// The coin does not belong to the player on turn.
    #[display("It's not {:?}'s turn", _0)]
    WrongPlayer(PlayerId),

    /// The coin stands on a cell its owner's path never visits.
    #[display("{} is off its path at {}", _0, _1)]
    OffPath(CoinId, Position),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
