use tracing::info;

use crate::core::consts::{FIRST_LEVEL, LAST_LEVEL};
use crate::core::levels::level_rows;
use crate::core::{PuzzleState, parse_level_rows};

/// Clamps any requested index into the catalog range.
pub fn clamp_level_index(index: i64) -> usize {
    index.clamp(FIRST_LEVEL as i64, LAST_LEVEL as i64) as usize
}

/// Clamps an unsigned index into the catalog range.
pub fn clamp_catalog_index(index: usize) -> usize {
    index.min(LAST_LEVEL)
}

/// Builds a fresh state for the requested level. Out-of-range indices are clamped.
pub fn load_level(index: i64) -> PuzzleState {
    let index = clamp_level_index(index);
    let state = parse_level_rows(level_rows(index), index);
    info!(
        level = index,
        width = state.width(),
        height = state.height(),
        crates = state.crates().len(),
        "loaded level"
    );
    state
}

pub fn next_level(current: &PuzzleState) -> PuzzleState {
    load_level(current.level_index() as i64 + 1)
}

pub fn previous_level(current: &PuzzleState) -> PuzzleState {
    load_level(current.level_index() as i64 - 1)
}

/// Discards every move made on the current level.
pub fn reload_level(current: &PuzzleState) -> PuzzleState {
    load_level(current.level_index() as i64)
}
