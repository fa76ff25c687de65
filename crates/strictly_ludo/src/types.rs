//! Core domain types for Ludo.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 15;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// Coins owned by each player.
pub const COINS_PER_PLAYER: usize = 4;

/// A board coordinate, zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row, counted from the top edge.
    pub row: usize,
    /// Column, counted from the left edge.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index into a `BOARD_SIZE` × `BOARD_SIZE` grid.
    pub const fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Inverse of [`Position::to_index`].
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    /// Returns the position if it lies on the board.
    pub fn checked(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }
}

/// What a cell is used for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, EnumIter,
)]
pub enum CellType {
    /// Not part of play.
    Wall,
    /// Ordinary track square.
    Normal,
    /// Track square on which coins cannot be captured.
    Safe,
    /// A player's entry square onto the track.
    Start,
    /// Yard square holding a coin before it enters play.
    Home,
    /// Last square of a home stretch.
    Finish,
}

impl CellType {
    /// Decodes a layout mask type code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Wall),
            1 => Some(Self::Normal),
            2 => Some(Self::Safe),
            3 => Some(Self::Start),
            4 => Some(Self::Finish),
            5 => Some(Self::Home),
            _ => None,
        }
    }

    /// Coins on this cell are never captured.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Safe | Self::Start | Self::Home | Self::Finish)
    }

    /// Landing here earns another roll.
    pub fn grants_bonus(self) -> bool {
        matches!(self, Self::Safe | Self::Start | Self::Home)
    }
}

/// Paint of a cell or coin.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, EnumIter,
)]
pub enum Color {
    /// Neutral track.
    White,
    /// Red player.
    Red,
    /// Green player.
    Green,
    /// Yellow player.
    Yellow,
    /// Blue player.
    Blue,
}

impl Color {
    /// Decodes a layout mask color code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::White),
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Blue),
            _ => None,
        }
    }

    /// The player this color belongs to, if any.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Self::White => None,
            Self::Red => Some(PlayerId::Red),
            Self::Green => Some(PlayerId::Green),
            Self::Yellow => Some(PlayerId::Yellow),
            Self::Blue => Some(PlayerId::Blue),
        }
    }
}

/// A seat at the table. Declaration order is turn order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
    EnumIter,
)]
pub enum PlayerId {
    /// Plays first; yard in the top-left corner.
    Red,
    /// Yard in the top-right corner.
    Green,
    /// Yard in the bottom-right corner.
    Yellow,
    /// Yard in the bottom-left corner.
    Blue,
}

impl PlayerId {
    /// All players in turn order.
    pub const ALL: [PlayerId; PLAYER_COUNT] =
        [PlayerId::Red, PlayerId::Green, PlayerId::Yellow, PlayerId::Blue];

    /// Seat index in turn order.
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Yellow => 2,
            Self::Blue => 3,
        }
    }

    /// Player seated at `index`, wrapping modulo the player count.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % PLAYER_COUNT]
    }

    /// The player whose turn follows this one.
    #[instrument]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Color of this player's cells and coins.
    pub fn color(self) -> Color {
        match self {
            Self::Red => Color::Red,
            Self::Green => Color::Green,
            Self::Yellow => Color::Yellow,
            Self::Blue => Color::Blue,
        }
    }

    /// Every other player, in turn order.
    pub fn others(self) -> impl Iterator<Item = PlayerId> {
        PlayerId::iter().filter(move |p| *p != self)
    }
}

/// Where a player is in the turn lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum PlayerState {
    /// Not this player's turn.
    Inactive,
    /// Must roll the dice.
    WaitingRoll,
    /// Roll in progress.
    Rolling,
    /// Roll landed; legal moves are being worked out.
    Thinking,
    /// Several coins can move; waiting for a choice.
    SelectingCoin,
    /// A move is being applied.
    Moving,
    /// All four coins reached FINISH.
    Won,
    /// Everyone else won first.
    Lost,
}

impl PlayerState {
    /// `Won` and `Lost` never change again.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Face of a six-sided die.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiceValue(u8);

impl DiceValue {
    /// Lowest face.
    pub const MIN: u8 = 1;
    /// Highest face.
    pub const MAX: u8 = 6;
    /// The face that traditionally earns a bonus roll.
    pub const SIX: DiceValue = DiceValue(6);

    /// Returns the face if `value` is in 1..=6.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Face value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Face value as a step count along a path.
    pub fn steps(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<u8> for DiceValue {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("dice value {} is outside 1..=6", value))
    }
}

impl From<DiceValue> for u8 {
    fn from(value: DiceValue) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_round_trip_corners() {
        let corner = Position::new(14, 14);
        assert_eq!(corner.to_index(), 224);
        assert_eq!(Position::from_index(224), corner);
    }

    #[test]
    fn test_position_checked_rejects_out_of_bounds() {
        assert!(Position::checked(15, 0).is_none());
        assert!(Position::checked(0, 15).is_none());
        assert_eq!(Position::checked(7, 7), Some(Position::new(7, 7)));
    }

    #[test]
    fn test_turn_order_wraps() {
        assert_eq!(PlayerId::Red.next(), PlayerId::Green);
        assert_eq!(PlayerId::Green.next(), PlayerId::Yellow);
        assert_eq!(PlayerId::Yellow.next(), PlayerId::Blue);
        assert_eq!(PlayerId::Blue.next(), PlayerId::Red);
    }

    #[test]
    fn test_others_excludes_self() {
        let others: Vec<_> = PlayerId::Yellow.others().collect();
        assert_eq!(others, vec![PlayerId::Red, PlayerId::Green, PlayerId::Blue]);
    }

    #[test]
    fn test_cell_codes() {
        assert_eq!(CellType::from_code(4), Some(CellType::Finish));
        assert_eq!(CellType::from_code(5), Some(CellType::Home));
        assert_eq!(CellType::from_code(6), None);
        assert_eq!(Color::from_code(3), Some(Color::Yellow));
        assert_eq!(Color::from_code(9), None);
    }

    #[test]
    fn test_protected_and_bonus_cells() {
        assert!(CellType::Finish.is_protected());
        assert!(!CellType::Finish.grants_bonus());
        assert!(CellType::Safe.grants_bonus());
        assert!(!CellType::Normal.is_protected());
    }

    #[test]
    fn test_dice_value_bounds() {
        assert!(DiceValue::new(0).is_none());
        assert!(DiceValue::new(7).is_none());
        assert_eq!(DiceValue::new(6), Some(DiceValue::SIX));
        assert_eq!(DiceValue::try_from(3).map(DiceValue::get), Ok(3));
    }
}
