//! Game setup phase.
//!
//! [`GameSetup`] collects rules, dice and an optional custom position, and
//! is consumed by [`GameSetup::start`] to produce a running [`Game`].
//! Nothing can be played on a setup.

use crate::coin::CoinId;
use crate::dice::DiceRoller;
use crate::error::ConfigError;
use crate::game::Game;
use crate::queries::all_coins_finished;
use crate::rules::RuleSet;
use crate::state::GameState;
use crate::types::{PlayerId, PlayerState, Position};
use tracing::{info, instrument};

/// A game that has not started yet.
#[derive(Debug)]
pub struct GameSetup {
    rules: RuleSet,
    dice: Option<Box<dyn DiceRoller>>,
    placements: Vec<Placement>,
    first: PlayerId,
}

#[derive(Debug, Clone, Copy)]
enum Placement {
    Cell(CoinId, Position),
    PathIndex(CoinId, usize),
}

impl GameSetup {
    /// Standard opening: all coins in their yards, Red first, random dice.
    #[instrument]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            dice: None,
            placements: Vec::new(),
            first: PlayerId::Red,
        }
    }

    /// Uses `dice` instead of OS-seeded random dice.
    pub fn with_dice(mut self, dice: impl DiceRoller + 'static) -> Self {
        self.dice = Some(Box::new(dice));
        self
    }

    /// Puts `coin` on `position` before the game starts. Later placements
    /// of the same coin win.
    pub fn with_coin_at(mut self, coin: CoinId, position: Position) -> Self {
        self.placements.push(Placement::Cell(coin, position));
        self
    }

    /// Puts `coin` at `index` on its owner's path.
    ///
    /// An index past FINISH is reported by [`Self::start`].
    pub fn with_coin_at_index(mut self, coin: CoinId, index: usize) -> Self {
        self.placements.push(Placement::PathIndex(coin, index));
        self
    }

    /// Gives the first turn to `player` instead of Red.
    pub fn with_current_player(mut self, player: PlayerId) -> Self {
        self.first = player;
        self
    }

    /// Rules that will be in force.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validates the setup and starts play.
    ///
    /// Players whose four coins already stand on FINISH start as `Won`,
    /// and the first turn goes to `first` or the next unfinished player.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the rules are inconsistent or a placement
    /// is neither the coin's yard cell nor on its owner's path.
    #[instrument(skip(self), fields(first = %self.first, placements = self.placements.len()))]
    pub fn start(self) -> Result<Game, ConfigError> {
        self.rules.validate()?;
        let mut state = GameState::new()?;

        for placement in &self.placements {
            let (coin, position) = match *placement {
                Placement::Cell(coin, position) => {
                    let on_path = state.paths().get(coin.player()).index_of(position).is_some();
                    if !on_path && *state.coin(coin).origin() != position {
                        return Err(ConfigError::new(format!(
                            "{} cannot be placed at {}: not its yard cell or on its path",
                            coin, position
                        )));
                    }
                    (coin, position)
                }
                Placement::PathIndex(coin, index) => {
                    let position = state
                        .paths()
                        .get(coin.player())
                        .position_at(index)
                        .ok_or_else(|| {
                            ConfigError::new(format!(
                                "{} cannot be placed past FINISH at index {}",
                                coin, index
                            ))
                        })?;
                    (coin, position)
                }
            };
            state.relocate(coin, position);
        }

        for player in PlayerId::ALL {
            if all_coins_finished(&state, player) {
                state.set_player_state(player, PlayerState::Won);
                state.standings.push(player);
                info!(%player, "Player starts with all coins home");
            }
        }

        let mut game = Game::from_parts(state, self.rules, self.dice);
        game.hand_over(self.first.index());
        info!(rules = ?game.rules(), current = %game.state().current_player().id(), "Game started");
        Ok(game)
    }
}
