//! The entry points a presentation layer drives.

use crate::core::{Direction, PuzzleState, navigation, update};

pub fn init(level_index: i64) -> PuzzleState {
    navigation::load_level(level_index)
}

pub fn apply_direction(state: &PuzzleState, direction: Direction) -> PuzzleState {
    update::apply_direction(state, direction)
}

pub fn is_complete(state: &PuzzleState) -> bool {
    state.is_complete()
}

pub fn current_level_index(state: &PuzzleState) -> usize {
    state.level_index()
}

pub fn next(state: &PuzzleState) -> PuzzleState {
    navigation::next_level(state)
}

pub fn previous(state: &PuzzleState) -> PuzzleState {
    navigation::previous_level(state)
}

pub fn reload(state: &PuzzleState) -> PuzzleState {
    navigation::reload_level(state)
}
