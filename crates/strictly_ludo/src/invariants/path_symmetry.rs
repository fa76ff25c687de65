//! All four paths have the same shape.

use super::Invariant;
use crate::path::PATH_LEN;
use crate::state::GameState;
use crate::types::CellType;

/// Invariant: every path has [`PATH_LEN`] cells, starts on its owner's
/// START cell and ends on its owner's FINISH cell.
pub struct PathSymmetryInvariant;

impl Invariant<GameState> for PathSymmetryInvariant {
    fn holds(state: &GameState) -> bool {
        state.paths().iter().all(|path| {
            let color = path.player().color();
            let entry = state.board().cell(path.entry());
            let finish = state.board().cell(path.finish());
            path.len() == PATH_LEN
                && *entry.kind() == CellType::Start
                && *entry.color() == color
                && *finish.kind() == CellType::Finish
                && *finish.color() == color
        })
    }

    fn description() -> &'static str {
        "All paths have equal length and run from own START to own FINISH"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_paths_hold() {
        let state = GameState::new().unwrap();
        assert!(PathSymmetryInvariant::holds(&state));
    }
}
