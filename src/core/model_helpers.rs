use std::collections::BTreeSet;

use crate::core::consts::{CRATE, CRATE_ON_TARGET, FLOOR, PLAYER, PLAYER_ON_TARGET, TARGET, WALL};
use crate::core::{Position, PuzzleState};

impl PuzzleState {
    /// True when the crates sit exactly on the targets. Recomputed on every call.
    pub fn is_complete(&self) -> bool {
        self.crates == self.targets
    }

    pub fn crates_on_targets(&self) -> usize {
        self.crates.intersection(&self.targets).count()
    }

    pub fn walls(&self) -> &BTreeSet<Position> {
        &self.walls
    }

    pub fn targets(&self) -> &BTreeSet<Position> {
        &self.targets
    }

    pub fn crates(&self) -> &BTreeSet<Position> {
        &self.crates
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn symbol_at(&self, pos: Position) -> char {
        let has_target = self.targets.contains(&pos);
        if self.walls.contains(&pos) {
            WALL
        } else if self.player == pos {
            if has_target { PLAYER_ON_TARGET } else { PLAYER }
        } else if self.crates.contains(&pos) {
            if has_target { CRATE_ON_TARGET } else { CRATE }
        } else if has_target {
            TARGET
        } else {
            FLOOR
        }
    }
}

/// Draws the state with one text line per grid row.
pub fn render_to_string(game: &PuzzleState) -> String {
    let mut result = String::new();
    for y in 0..game.height {
        for x in 0..game.width {
            result.push(game.symbol_at(Position { x, y }));
        }
        result.push('\n');
    }
    result
}
