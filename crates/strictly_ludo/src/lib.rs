//! Strictly Ludo - a four-player Ludo rules engine
//!
//! The crate models the board, the four player paths, the turn state
//! machine and move resolution. It draws nothing and reads no input: a
//! front end feeds it stimuli and renders [`GameState`] between them.
//!
//! # Architecture
//!
//! - **Board**: 15×15 cells built from fixed type and color masks
//! - **Paths**: one 57-cell route per player, START to FINISH
//! - **Resolver**: legality, movement, capture and win detection
//! - **Game**: the turn machine that owns the state and the dice
//!
//! # Example
//!
//! ```
//! use strictly_ludo::{Game, RuleSet, ScriptedDice, TurnReport};
//!
//! # fn main() -> Result<(), strictly_ludo::ConfigError> {
//! let mut game = Game::with_dice(RuleSet::default(), ScriptedDice::new([6])?)?;
//! match game.roll_dice() {
//!     TurnReport::AwaitingSelection { playable, .. } => {
//!         let report = game.select_coin(playable[0]);
//!         assert!(report.outcome().is_some());
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod coin;
mod dice;
mod error;
mod game;
mod path;
mod player;
mod resolver;
mod rules;
mod setup;
mod state;
mod types;

// Public modules
pub mod contracts;
pub mod invariants;
pub mod queries;

// Crate-level exports - Core types
pub use types::{
    BOARD_SIZE, COINS_PER_PLAYER, CellType, Color, DiceValue, PLAYER_COUNT, PlayerId, PlayerState,
    Position,
};

// Crate-level exports - Board and paths
pub use board::{Board, CELL_TYPE_MASK, COLOR_MASK, Cell};
pub use coin::{Coin, CoinId};
pub use path::{HOME_STRETCH_LEN, LOOP_LEN, PATH_LEN, PlayerPath, PlayerPaths};

// Crate-level exports - State
pub use player::Player;
pub use state::GameState;

// Crate-level exports - Rules and dice
pub use dice::{DiceRoller, DiceState, RandomDice, ScriptedDice};
pub use rules::{RuleSet, YardRelease};

// Crate-level exports - Moves and turns
pub use action::{Capture, MoveError, MoveOutcome, Stimulus, TurnReport};
pub use game::Game;
pub use resolver::{destination_index, is_coin_playable, playable_coins, resolve_move};
pub use setup::GameSetup;

// Crate-level exports - Errors
pub use error::ConfigError;
