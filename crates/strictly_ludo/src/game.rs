//! The game controller and its turn state machine.
//!
//! A [`Game`] owns the [`GameState`], the house rules and the dice. It
//! accepts one stimulus at a time and runs it to completion:
//!
//! ```text
//! Inactive ─grant─▶ WaitingRoll ─roll─▶ Rolling ─▶ Thinking
//!                                                  │ 0 coins ─▶ end turn
//!                                                  │ 1 coin  ─▶ Moving
//!                                                  │ n coins ─▶ SelectingCoin ─select─▶ Moving
//! Moving ─▶ Won (all home) | WaitingRoll (bonus) | end turn
//! ```
//!
//! Ending a turn hands it to the next player in seat order who has not
//! finished. Before a turn is granted, a player whose opponents have all
//! won becomes `Lost` instead.

use crate::action::{MoveOutcome, Stimulus, TurnReport};
use crate::coin::CoinId;
use crate::contracts::{CoinMove, Contract, MoveContract};
use crate::dice::{DiceRoller, RandomDice};
use crate::error::ConfigError;
use crate::resolver::{playable_coins, resolve_move};
use crate::rules::RuleSet;
use crate::setup::GameSetup;
use crate::state::GameState;
use crate::types::{PLAYER_COUNT, PlayerId, PlayerState, Position};
use tracing::{debug, info, instrument, warn};

/// A running game.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    rules: RuleSet,
    dice: Box<dyn DiceRoller>,
    playable: Vec<CoinId>,
}

impl Game {
    /// Starts a standard game with random dice: all coins in their yards,
    /// Red to roll.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the rules are inconsistent.
    #[instrument]
    pub fn new(rules: RuleSet) -> Result<Self, ConfigError> {
        GameSetup::new(rules).start()
    }

    /// Starts a standard game with the given dice.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the rules are inconsistent.
    #[instrument(skip(dice))]
    pub fn with_dice(
        rules: RuleSet,
        dice: impl DiceRoller + 'static,
    ) -> Result<Self, ConfigError> {
        GameSetup::new(rules).with_dice(dice).start()
    }

    /// Wraps a prepared state. The first turn is granted by `hand_over`.
    pub(crate) fn from_parts(
        state: GameState,
        rules: RuleSet,
        dice: Option<Box<dyn DiceRoller>>,
    ) -> Self {
        Self {
            state,
            rules,
            dice: dice.unwrap_or_else(|| Box::new(RandomDice::new())),
            playable: Vec::new(),
        }
    }

    /// Read-only view for renderers.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rules in force.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Coins the current player may choose from, empty unless selecting.
    pub fn playable(&self) -> &[CoinId] {
        &self.playable
    }

    /// True once no player can take another turn.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Dispatches a stimulus.
    pub fn handle(&mut self, stimulus: Stimulus) -> TurnReport {
        match stimulus {
            Stimulus::Roll => self.roll_dice(),
            Stimulus::SelectCoin(coin) => self.select_coin(coin),
            Stimulus::SelectCell(position) => self.select_cell(position),
        }
    }

    /// Rolls for the current player if they are waiting to roll.
    #[instrument(skip(self), fields(player = %self.current()))]
    pub fn roll_dice(&mut self) -> TurnReport {
        let player = self.current();
        if self.is_over() || self.current_state() != PlayerState::WaitingRoll {
            debug!(state = ?self.current_state(), "Roll ignored");
            return TurnReport::Ignored;
        }

        self.state.set_player_state(player, PlayerState::Rolling);
        self.state.dice.begin_roll();
        let value = self.dice.roll();
        self.state.dice.land(value);
        self.state.started = true;
        self.state.set_player_state(player, PlayerState::Thinking);
        info!(%player, dice = value.get(), "Rolled");

        let playable = playable_coins(&self.state, &self.rules, player, value);
        self.state.players[player.index()].set_has_moves(!playable.is_empty());

        match playable.as_slice() {
            [] => {
                info!(%player, dice = value.get(), "No legal move");
                self.end_turn();
                TurnReport::NoMoves { player, dice: value }
            }
            [only] => {
                let coin = *only;
                self.apply_move(coin)
            }
            _ => {
                self.state.set_player_state(player, PlayerState::SelectingCoin);
                self.playable = playable.clone();
                TurnReport::AwaitingSelection {
                    player,
                    dice: value,
                    playable,
                }
            }
        }
    }

    /// Moves `coin` if it is one of the current player's choices.
    #[instrument(skip_all, fields(coin = %coin))]
    pub fn select_coin(&mut self, coin: CoinId) -> TurnReport {
        if self.current_state() != PlayerState::SelectingCoin || !self.playable.contains(&coin) {
            debug!(state = ?self.current_state(), "Selection ignored");
            return TurnReport::Ignored;
        }
        self.apply_move(coin)
    }

    /// Moves the current player's first playable coin standing on `position`.
    #[instrument(skip_all, fields(position = %position))]
    pub fn select_cell(&mut self, position: Position) -> TurnReport {
        if self.current_state() != PlayerState::SelectingCoin {
            debug!(state = ?self.current_state(), "Cell selection ignored");
            return TurnReport::Ignored;
        }
        let Some(cell) = self.state.board().cell_at(position.row, position.col) else {
            debug!("Cell off the board");
            return TurnReport::Ignored;
        };
        let chosen = cell
            .coins()
            .iter()
            .copied()
            .find(|coin| self.playable.contains(coin));
        match chosen {
            Some(coin) => self.apply_move(coin),
            None => {
                debug!("No playable coin on cell");
                TurnReport::Ignored
            }
        }
    }

    fn current(&self) -> PlayerId {
        *self.state.current_player().id()
    }

    fn current_state(&self) -> PlayerState {
        *self.state.current_player().state()
    }

    fn apply_move(&mut self, coin: CoinId) -> TurnReport {
        let player = self.current();
        let prior = self.current_state();
        let action = CoinMove::new(coin, *self.state.dice().value());

        if let Err(e) = MoveContract::pre(&self.state, &self.rules, &action) {
            warn!(error = %e, %action, "Move precondition failed");
            return TurnReport::Ignored;
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        self.state.set_player_state(player, PlayerState::Moving);
        let outcome = match resolve_move(&mut self.state, &self.rules, coin, action.dice) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, %action, "Move rejected");
                self.state.set_player_state(player, prior);
                return TurnReport::Ignored;
            }
        };
        self.playable.clear();
        self.after_move(&outcome);

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, &self.state) {
            panic!("{}", e);
        }

        TurnReport::Moved(outcome)
    }

    fn after_move(&mut self, outcome: &MoveOutcome) {
        let player = outcome.player();
        info!(
            %player,
            coin = %outcome.coin,
            to = %outcome.to,
            index = outcome.to_index,
            captures = outcome.captures.len(),
            "Moved"
        );

        if outcome.won {
            self.state.set_player_state(player, PlayerState::Won);
            self.state.standings.push(player);
            info!(%player, place = self.state.standings.len(), "Player won");
            self.hand_over(player.index() + 1);
        } else if outcome.bonus_turn {
            debug!(%player, "Bonus turn");
            if !self.grant_turn(player) {
                self.hand_over(player.index() + 1);
            }
        } else {
            self.end_turn();
        }
    }

    fn end_turn(&mut self) {
        let player = self.current();
        if !self.state.player(player).is_finished() {
            self.state.set_player_state(player, PlayerState::Inactive);
        }
        self.hand_over(player.index() + 1);
    }

    /// Gives the turn to the first unfinished player from seat `start` on.
    #[instrument(skip(self))]
    pub(crate) fn hand_over(&mut self, start: usize) {
        for step in 0..PLAYER_COUNT {
            let candidate = PlayerId::from_index(start + step);
            if self.state.player(candidate).is_finished() {
                continue;
            }
            self.state.current_player_index = candidate.index();
            if self.grant_turn(candidate) {
                debug!(player = %candidate, "Turn granted");
                return;
            }
        }
        info!(standings = ?self.state.standings, "Game over");
    }

    /// Sets `player` to `WaitingRoll`, or to `Lost` if nobody is left to
    /// play against.
    fn grant_turn(&mut self, player: PlayerId) -> bool {
        let everyone_else_won = player
            .others()
            .all(|o| *self.state.player(o).state() == PlayerState::Won);
        if everyone_else_won {
            self.state.set_player_state(player, PlayerState::Lost);
            info!(%player, "Player lost");
            return false;
        }
        self.state.set_player_state(player, PlayerState::WaitingRoll);
        true
    }
}
