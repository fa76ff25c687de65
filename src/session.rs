//! Line-driven play session.
//!
//! A [`Session`] reads one command per line, feeds the matching stimulus
//! to the game, and writes what happened. Input and output are generic so
//! the same loop runs on a terminal or in tests.

use crate::config::PlayConfig;
use crate::display::{describe, render_board, render_status};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_ludo::{CoinId, ConfigError, Game, Position, Stimulus};
use tracing::{debug, info, instrument};

const HELP: &str = "\
commands:
  roll            roll the die
  coin SLOT       move your coin 0-3
  pick ROW COL    move your coin standing on a cell
  board           show the board
  state           dump the game state as JSON
  help            show this help
  quit            leave the game";

/// Unparseable or unusable command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", message)]
pub struct CommandError {
    /// What went wrong.
    pub message: String,
}

impl CommandError {
    /// Creates a command error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Roll the die.
    Roll,
    /// Select the coin on a cell.
    Pick(Position),
    /// Select a coin by slot.
    Coin(u8),
    /// Print the board.
    Board,
    /// Print the state as JSON.
    State,
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

fn parse_number<T: FromStr>(word: Option<&str>, usage: &str) -> Result<T, CommandError> {
    word.and_then(|w| w.parse().ok())
        .ok_or_else(|| CommandError::new(format!("usage: {}", usage)))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = match words.next().map(str::to_ascii_lowercase).as_deref() {
            Some("roll" | "r") => Self::Roll,
            Some("coin" | "c") => Self::Coin(parse_number(words.next(), "coin SLOT")?),
            Some("pick" | "p") => {
                let row = parse_number(words.next(), "pick ROW COL")?;
                let col = parse_number(words.next(), "pick ROW COL")?;
                let position = Position::checked(row, col).ok_or_else(|| {
                    CommandError::new(format!("({}, {}) is off the board", row, col))
                })?;
                Self::Pick(position)
            }
            Some("board" | "b") => Self::Board,
            Some("state") => Self::State,
            Some("help" | "h" | "?") => Self::Help,
            Some("quit" | "q" | "exit") => Self::Quit,
            Some(other) => return Err(CommandError::new(format!("unknown command: {}", other))),
            None => return Err(CommandError::new("empty command")),
        };
        if words.next().is_some() {
            return Err(CommandError::new(format!("too many arguments: {}", line.trim())));
        }
        Ok(command)
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this and keep going.
    Text(String),
    /// Stop.
    Quit,
}

/// A game played over text lines.
#[derive(Debug)]
pub struct Session {
    game: Game,
}

impl Session {
    /// Wraps a running game.
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// Starts a game from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured rules are inconsistent.
    #[instrument(skip(config))]
    pub fn from_config(config: &PlayConfig) -> Result<Self, ConfigError> {
        let game = Game::with_dice(*config.rules(), config.dice())?;
        Ok(Self::new(game))
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Applies one command.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` for an invalid coin slot or a state that
    /// cannot be serialized.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> Result<Reply, CommandError> {
        let stimulus = match command {
            Command::Roll => Stimulus::Roll,
            Command::Pick(position) => Stimulus::SelectCell(position),
            Command::Coin(slot) => {
                let player = *self.game.state().current_player().id();
                let coin = CoinId::new(player, slot)
                    .ok_or_else(|| CommandError::new(format!("no coin in slot {}", slot)))?;
                Stimulus::SelectCoin(coin)
            }
            Command::Board => return Ok(Reply::Text(render_board(self.game.state()))),
            Command::State => {
                let json = serde_json::to_string_pretty(self.game.state())
                    .map_err(|e| CommandError::new(format!("Failed to serialize state: {}", e)))?;
                return Ok(Reply::Text(json));
            }
            Command::Help => return Ok(Reply::Text(HELP.to_string())),
            Command::Quit => return Ok(Reply::Quit),
        };

        let report = self.game.handle(stimulus);
        debug!(?report, "Stimulus handled");
        let mut text = describe(&report);
        if report.outcome().is_some() {
            text.push('\n');
            text.push_str(&render_board(self.game.state()));
        }
        text.push('\n');
        text.push_str(&render_status(&self.game));
        Ok(Reply::Text(text))
    }

    /// Runs until `quit`, end of input, or the end of the game.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `input` or `output`.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> std::io::Result<()> {
        writeln!(output, "{}", render_board(self.game.state()))?;
        writeln!(output, "{}", render_status(&self.game))?;
        write!(output, "{}", self.prompt())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(output, "{}", self.prompt())?;
                output.flush()?;
                continue;
            }
            let reply = line.parse::<Command>().and_then(|command| self.execute(command));
            match reply {
                Ok(Reply::Quit) => {
                    info!("Player quit");
                    return Ok(());
                }
                Ok(Reply::Text(text)) => writeln!(output, "{}", text)?,
                Err(e) => writeln!(output, "error: {}", e)?,
            }
            if self.game.is_over() {
                let names: Vec<String> = self
                    .game
                    .state()
                    .standings()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(output, "Game over. Standings: {}", names.join(", "))?;
                info!("Session finished");
                return Ok(());
            }
            write!(output, "{}", self.prompt())?;
            output.flush()?;
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        format!("{}> ", self.game.state().current_player().id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("roll".parse::<Command>(), Ok(Command::Roll));
        assert_eq!(" R ".parse::<Command>(), Ok(Command::Roll));
        assert_eq!("coin 2".parse::<Command>(), Ok(Command::Coin(2)));
        assert_eq!(
            "pick 6 1".parse::<Command>(),
            Ok(Command::Pick(Position::new(6, 1)))
        );
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!("dance".parse::<Command>().is_err());
        assert!("coin".parse::<Command>().is_err());
        assert!("pick 6".parse::<Command>().is_err());
        assert!("pick 20 1".parse::<Command>().is_err());
        assert!("roll twice".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }
}
