use tracing::debug;

use crate::core::{BlockReason, Direction, MoveOutcome, Position, PuzzleState, StepResult};

/// Applies one direction and reports what happened.
///
/// Never fails: a blocked move returns the state unchanged together with the reason.
pub fn step(game: &PuzzleState, dir: Direction) -> StepResult {
    let outcome = resolve_move(game, dir);
    debug!(level = game.level_index, ?dir, ?outcome, "step");

    let state = match outcome {
        MoveOutcome::Moved => PuzzleState {
            player: game.player + dir.offset(),
            ..game.clone()
        },
        MoveOutcome::Pushed { from, to } => {
            let mut crates = game.crates.clone();
            crates.remove(&from);
            crates.insert(to);
            PuzzleState {
                crates,
                player: from,
                ..game.clone()
            }
        }
        MoveOutcome::Blocked(_) | MoveOutcome::Ignored => game.clone(),
    };

    StepResult { state, outcome }
}

/// Applies one direction, returning the next state.
pub fn apply_direction(game: &PuzzleState, dir: Direction) -> PuzzleState {
    step(game, dir).state
}

fn resolve_move(game: &PuzzleState, dir: Direction) -> MoveOutcome {
    if dir == Direction::Ignore {
        return MoveOutcome::Ignored;
    }

    let next = game.player + dir.offset();
    if !game.in_bounds(next) {
        return MoveOutcome::Blocked(BlockReason::OutOfBounds);
    }
    if game.walls.contains(&next) {
        return MoveOutcome::Blocked(BlockReason::Wall);
    }
    if !game.crates.contains(&next) {
        return MoveOutcome::Moved;
    }

    let beyond = next + dir.offset();
    if !game.in_bounds(beyond) {
        MoveOutcome::Blocked(BlockReason::OutOfBounds)
    } else if game.walls.contains(&beyond) {
        MoveOutcome::Blocked(BlockReason::WallBehindCrate)
    } else if game.crates.contains(&beyond) {
        MoveOutcome::Blocked(BlockReason::CrateBehindCrate)
    } else {
        MoveOutcome::Pushed {
            from: next,
            to: beyond,
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn offset(self) -> Position {
        match self {
            Direction::Up => Position { x: 0, y: -1 },
            Direction::Down => Position { x: 0, y: 1 },
            Direction::Left => Position { x: -1, y: 0 },
            Direction::Right => Position { x: 1, y: 0 },
            Direction::Ignore => Position { x: 0, y: 0 },
        }
    }
}
