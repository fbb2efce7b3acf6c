use std::collections::BTreeSet;
use std::ops::Add;

use serde::Serialize;

/// A grid coordinate. `x` is the column (growing rightward), `y` the row (growing downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// No recognised movement intent. Applying it never changes the state.
    Ignore,
}

/// Commands the front end may issue against the active level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Move(Direction),
    NextLevel,
    PreviousLevel,
    ReloadLevel,
}

/// The runtime model of the level being played.
///
/// `walls` and `targets` never change after parsing; only `player` and the members of
/// `crates` move. Use the accessors in `model_helpers` to read it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    pub(crate) walls: BTreeSet<Position>,
    pub(crate) targets: BTreeSet<Position>,
    pub(crate) crates: BTreeSet<Position>,
    pub(crate) player: Position,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) level_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    Wall,
    WallBehindCrate,
    CrateBehindCrate,
    OutOfBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Moved,
    Pushed { from: Position, to: Position },
    Blocked(BlockReason),
    Ignored,
}

impl MoveOutcome {
    pub fn changed_state(&self) -> bool {
        matches!(self, MoveOutcome::Moved | MoveOutcome::Pushed { .. })
    }
}

pub struct StepResult {
    pub state: PuzzleState,
    pub outcome: MoveOutcome,
}
