mod model_helpers;
mod models;
mod update;
mod consts;
mod parse;
mod navigation;
mod session;
pub mod engine;
pub mod levels;

pub use models::{
    BlockReason, Command, Direction, MoveOutcome, Position, PuzzleState, StepResult,
};
pub use consts::*;
pub use model_helpers::render_to_string;
pub use navigation::{clamp_catalog_index, clamp_level_index, load_level, next_level, previous_level, reload_level};
pub use parse::{parse_level_rows, parse_level_str, parse_level_strict, validate_level};
pub use session::Session;
pub use update::{apply_direction, step};
