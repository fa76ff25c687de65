//! The 15×15 board and its fixed layout.
//!
//! The layout is encoded as two masks: one giving each cell's type, one
//! giving its owning color. Every yard (`Home`) cell is seeded with one coin
//! of the yard's color, which is the game's only starting configuration.

use crate::coin::{Coin, CoinId};
use crate::error::ConfigError;
use crate::types::{
    BOARD_SIZE, COINS_PER_PLAYER, CellType, Color, PLAYER_COUNT, PlayerId, Position,
};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Cell type codes: 0 wall, 1 normal, 2 safe, 3 start, 4 finish, 5 yard.
#[rustfmt::skip]
pub const CELL_TYPE_MASK: [[u8; BOARD_SIZE]; BOARD_SIZE] = [
//   0  1  2  3  4  5  6  7  8  9 10 11 12 13 14
    [0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0], // 0
    [0, 0, 0, 0, 0, 0, 1, 2, 3, 0, 0, 0, 0, 0, 0], // 1
    [0, 0, 5, 5, 0, 0, 2, 2, 1, 0, 0, 5, 5, 0, 0], // 2
    [0, 0, 5, 5, 0, 0, 1, 2, 1, 0, 0, 5, 5, 0, 0], // 3
    [0, 0, 0, 0, 0, 0, 1, 2, 1, 0, 0, 0, 0, 0, 0], // 4
    [0, 0, 0, 0, 0, 0, 1, 2, 1, 0, 0, 0, 0, 0, 0], // 5
    [1, 3, 1, 1, 1, 1, 0, 4, 0, 1, 1, 1, 2, 1, 1], // 6
    [1, 2, 2, 2, 2, 2, 4, 0, 4, 2, 2, 2, 2, 2, 1], // 7
    [1, 1, 2, 1, 1, 1, 0, 4, 0, 1, 1, 1, 1, 3, 1], // 8
    [0, 0, 0, 0, 0, 0, 1, 2, 1, 0, 0, 0, 0, 0, 0], // 9
    [0, 0, 0, 0, 0, 0, 1, 2, 1, 0, 0, 0, 0, 0, 0], // 10
    [0, 0, 5, 5, 0, 0, 1, 2, 1, 0, 0, 5, 5, 0, 0], // 11
    [0, 0, 5, 5, 0, 0, 1, 2, 3, 0, 0, 5, 5, 0, 0], // 12
    [0, 0, 0, 0, 0, 0, 3, 2, 1, 0, 0, 0, 0, 0, 0], // 13
    [0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0], // 14
];

/// Color codes: 0 white, 1 red, 2 green, 3 yellow, 4 blue.
#[rustfmt::skip]
pub const COLOR_MASK: [[u8; BOARD_SIZE]; BOARD_SIZE] = [
//   0  1  2  3  4  5  6  7  8  9 10 11 12 13 14
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 2, 2, 2, 2, 2, 2], // 0
    [1, 0, 0, 0, 0, 1, 0, 2, 2, 2, 0, 0, 0, 0, 2], // 1
    [1, 0, 1, 1, 0, 1, 0, 2, 0, 2, 0, 2, 2, 0, 2], // 2
    [1, 0, 1, 1, 0, 1, 0, 2, 0, 2, 0, 2, 2, 0, 2], // 3
    [1, 0, 0, 0, 0, 1, 0, 2, 0, 2, 0, 0, 0, 0, 2], // 4
    [1, 1, 1, 1, 1, 1, 0, 2, 0, 2, 2, 2, 2, 2, 2], // 5
    [0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0], // 6
    [0, 1, 1, 1, 1, 1, 1, 0, 3, 3, 3, 3, 3, 3, 0], // 7
    [0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 3, 0], // 8
    [4, 4, 4, 4, 4, 4, 0, 4, 0, 3, 3, 3, 3, 3, 3], // 9
    [4, 0, 0, 0, 0, 4, 0, 4, 0, 3, 0, 0, 0, 0, 3], // 10
    [4, 0, 4, 4, 0, 4, 0, 4, 0, 3, 0, 3, 3, 0, 3], // 11
    [4, 0, 4, 4, 0, 4, 0, 4, 0, 3, 0, 3, 3, 0, 3], // 12
    [4, 0, 0, 0, 0, 4, 4, 4, 0, 3, 0, 0, 0, 0, 3], // 13
    [4, 4, 4, 4, 4, 4, 0, 0, 0, 3, 3, 3, 3, 3, 3], // 14
];

/// One square of the board.
///
/// Cells never move. Only the list of coins standing on them changes.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Cell {
    /// Where the cell is.
    position: Position,
    /// What the cell is used for.
    kind: CellType,
    /// Owning color, white for neutral track.
    color: Color,
    /// Coins standing here, in arrival order.
    coins: Vec<CoinId>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new(position: Position, kind: CellType, color: Color) -> Self {
        Self {
            position,
            kind,
            color,
            coins: Vec::new(),
        }
    }

    /// Whether `coin` stands here.
    pub fn holds(&self, coin: CoinId) -> bool {
        self.coins.contains(&coin)
    }

    /// Coins here owned by someone other than `player`.
    pub fn opponents_of(&self, player: PlayerId) -> impl Iterator<Item = CoinId> + '_ {
        self.coins.iter().copied().filter(move |c| c.player() != player)
    }

    pub(crate) fn insert(&mut self, coin: CoinId) {
        debug_assert!(!self.holds(coin), "{coin} already on {}", self.position);
        self.coins.push(coin);
    }

    pub(crate) fn remove(&mut self, coin: CoinId) -> bool {
        let before = self.coins.len();
        self.coins.retain(|c| *c != coin);
        self.coins.len() != before
    }
}

/// The full board in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Builds the board from the fixed layout masks.
    ///
    /// Returns the board with every yard seeded, plus the 16 coins in
    /// player-major order (see [`CoinId::index`]).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the masks contain an unknown code, a yard
    /// cell has no owning player, or a player does not have exactly four
    /// yard cells.
    #[instrument]
    pub fn build() -> Result<(Self, Vec<Coin>), ConfigError> {
        Self::from_masks(&CELL_TYPE_MASK, &COLOR_MASK)
    }

    /// Builds a board from arbitrary masks.
    #[instrument(skip(types, colors))]
    pub fn from_masks(
        types: &[[u8; BOARD_SIZE]; BOARD_SIZE],
        colors: &[[u8; BOARD_SIZE]; BOARD_SIZE],
    ) -> Result<(Self, Vec<Coin>), ConfigError> {
        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        let mut yards: [Vec<Position>; PLAYER_COUNT] = Default::default();

        for (row, (type_row, color_row)) in types.iter().zip(colors.iter()).enumerate() {
            let codes = type_row.iter().zip(color_row.iter());
            for (col, (&type_code, &color_code)) in codes.enumerate() {
                let position = Position::new(row, col);
                let kind = CellType::from_code(type_code).ok_or_else(|| {
                    ConfigError::new(format!(
                        "unknown cell type code {} at {}",
                        type_code, position
                    ))
                })?;
                let color = Color::from_code(color_code).ok_or_else(|| {
                    ConfigError::new(format!("unknown color code {} at {}", color_code, position))
                })?;

                if kind == CellType::Home {
                    let owner = color.owner().ok_or_else(|| {
                        ConfigError::new(format!("yard cell {} has no owning player", position))
                    })?;
                    yards[owner.index()].push(position);
                }

                cells.push(Cell::new(position, kind, color));
            }
        }

        let mut board = Self { cells };
        let mut coins = Vec::with_capacity(PLAYER_COUNT * COINS_PER_PLAYER);

        for player in PlayerId::ALL {
            let yard = &yards[player.index()];
            if yard.len() != COINS_PER_PLAYER {
                return Err(ConfigError::new(format!(
                    "{} has {} yard cells, expected {}",
                    player,
                    yard.len(),
                    COINS_PER_PLAYER
                )));
            }
            for (id, &origin) in CoinId::all_for(player).zip(yard.iter()) {
                board.cell_mut(origin).insert(id);
                coins.push(Coin::new(id, origin));
            }
        }

        debug!(coins = coins.len(), "Board built");
        Ok((board, coins))
    }

    /// Cell at a position known to be on the board, such as a coin's.
    pub(crate) fn cell(&self, position: Position) -> &Cell {
        &self.cells[position.to_index()]
    }

    /// Cell at `position`, or `None` when it lies off the board.
    pub fn get(&self, position: Position) -> Option<&Cell> {
        Position::checked(position.row, position.col).map(|p| self.cell(p))
    }

    pub(crate) fn cell_mut(&mut self, position: Position) -> &mut Cell {
        &mut self.cells[position.to_index()]
    }

    /// Resolves a row/column from outside (e.g. a pointer hit) to a cell.
    ///
    /// Returns `None` when the coordinate is off the board.
    #[instrument(skip(self))]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.get(Position::new(row, col))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIZE)
    }

    /// Every coin on the board, in row-major cell order.
    pub fn coins(&self) -> impl Iterator<Item = CoinId> + '_ {
        self.cells.iter().flat_map(|c| c.coins.iter().copied())
    }

    /// Cells of the given type.
    pub fn cells_of(&self, kind: CellType) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(move |c| c.kind == kind)
    }
}
