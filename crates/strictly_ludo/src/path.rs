//! Per-player movement paths.
//!
//! The outer track is cut into eight shared segments, two per board edge:
//! a plain 6-cell arm, and an arm led by the single pivot cell at the tip
//! of the edge. A player's path is the same ring of segments rotated so
//! that it starts from that player's exit arm, followed by the player's
//! private home stretch. Because every path is a rotation of the same ring, all
//! paths have the same length and shape.

use crate::types::{PLAYER_COUNT, PlayerId, Position};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Cells in every player's path.
pub const PATH_LEN: usize = 57;

/// Cells in a private home stretch, FINISH included.
pub const HOME_STRETCH_LEN: usize = 6;

/// Cells in the shared outer ring.
pub const LOOP_LEN: usize = 52;

const fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Eight shared segments in clockwise order.
///
/// Red exits on segment 7 (left edge, upper arm), Green on 1 (top edge,
/// right arm), Yellow on 3, Blue on 5.
const SEGMENTS: [&[Position]; 8] = [
    // 0: top edge, left arm, upwards
    &[p(5, 6), p(4, 6), p(3, 6), p(2, 6), p(1, 6), p(0, 6)],
    // 1: top pivot, then top edge right arm downwards
    &[p(0, 7), p(0, 8), p(1, 8), p(2, 8), p(3, 8), p(4, 8), p(5, 8)],
    // 2: right edge, upper arm, rightwards
    &[p(6, 9), p(6, 10), p(6, 11), p(6, 12), p(6, 13), p(6, 14)],
    // 3: right pivot, then right edge lower arm leftwards
    &[p(7, 14), p(8, 14), p(8, 13), p(8, 12), p(8, 11), p(8, 10), p(8, 9)],
    // 4: bottom edge, right arm, downwards
    &[p(9, 8), p(10, 8), p(11, 8), p(12, 8), p(13, 8), p(14, 8)],
    // 5: bottom pivot, then bottom edge left arm upwards
    &[p(14, 7), p(14, 6), p(13, 6), p(12, 6), p(11, 6), p(10, 6), p(9, 6)],
    // 6: left edge, lower arm, leftwards
    &[p(8, 5), p(8, 4), p(8, 3), p(8, 2), p(8, 1), p(8, 0)],
    // 7: left pivot, then left edge upper arm rightwards
    &[p(7, 0), p(6, 0), p(6, 1), p(6, 2), p(6, 3), p(6, 4), p(6, 5)],
];

/// Where each player leaves the ring: (segment, offset into it).
///
/// The offset skips the pivot and the cell before the player's START, so
/// index 0 of every path is that player's START cell.
const EXITS: [(usize, usize); PLAYER_COUNT] = [
    (7, 2), // Red starts on (6, 1)
    (1, 2), // Green starts on (1, 8)
    (3, 2), // Yellow starts on (8, 13)
    (5, 2), // Blue starts on (13, 6)
];

/// Private home stretches, ending on each player's FINISH cell.
const HOME_STRETCHES: [[Position; HOME_STRETCH_LEN]; PLAYER_COUNT] = [
    [p(7, 1), p(7, 2), p(7, 3), p(7, 4), p(7, 5), p(7, 6)],
    [p(1, 7), p(2, 7), p(3, 7), p(4, 7), p(5, 7), p(6, 7)],
    [p(7, 13), p(7, 12), p(7, 11), p(7, 10), p(7, 9), p(7, 8)],
    [p(13, 7), p(12, 7), p(11, 7), p(10, 7), p(9, 7), p(8, 7)],
];

/// The ordered cells one player's coins travel, START to FINISH.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerPath {
    player: PlayerId,
    cells: Vec<Position>,
}

impl PlayerPath {
    /// Builds the path for `player` by rotating the shared ring.
    #[instrument]
    pub fn generate(player: PlayerId) -> Self {
        let (exit_segment, exit_offset) = EXITS[player.index()];

        // The ring, rotated to begin at the player's exit segment.
        let ring: Vec<Position> = (0..SEGMENTS.len())
            .flat_map(|i| SEGMENTS[(exit_segment + i) % SEGMENTS.len()].iter().copied())
            .collect();

        // Walk the ring from the START cell, stopping before the cell that
        // precedes it, which the owner never passes over.
        let mut cells: Vec<Position> = ring[exit_offset..].to_vec();
        cells.extend_from_slice(&ring[..exit_offset - 1]);
        cells.extend_from_slice(&HOME_STRETCHES[player.index()]);

        debug!(%player, len = cells.len(), "Path generated");
        Self { player, cells }
    }

    /// Owner of the path.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a generated path.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in travel order.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Cell at `index`, `None` past the end.
    pub fn position_at(&self, index: usize) -> Option<Position> {
        self.cells.get(index).copied()
    }

    /// Index of `position` on this path, `None` if the path never visits it.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.cells.iter().position(|p| *p == position)
    }

    /// Index 0: the START cell.
    pub fn entry(&self) -> Position {
        self.cells[0]
    }

    /// Last cell: the FINISH cell.
    pub fn finish(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    /// Index of the FINISH cell.
    pub fn finish_index(&self) -> usize {
        self.cells.len() - 1
    }
}

/// One path per player, indexed by [`PlayerId::index`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerPaths {
    paths: [PlayerPath; PLAYER_COUNT],
}

impl PlayerPaths {
    /// Generates all four paths.
    #[instrument]
    pub fn generate() -> Self {
        Self {
            paths: PlayerId::ALL.map(PlayerPath::generate),
        }
    }

    /// Path for `player`.
    pub fn get(&self, player: PlayerId) -> &PlayerPath {
        &self.paths[player.index()]
    }

    /// All paths in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerPath> {
        self.paths.iter()
    }

    /// The distinct cells of the shared outer ring.
    pub fn loop_cells() -> BTreeSet<Position> {
        SEGMENTS.iter().flat_map(|s| s.iter().copied()).collect()
    }
}
