use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::{Position, PuzzleState};
use crate::error::AppError;

/// Read-only view of a puzzle state for external renderers.
#[derive(Serialize, Debug, PartialEq)]
pub struct Snapshot<'a> {
    pub level_index: usize,
    pub width: i32,
    pub height: i32,
    pub player: Position,
    pub walls: &'a BTreeSet<Position>,
    pub targets: &'a BTreeSet<Position>,
    pub crates: &'a BTreeSet<Position>,
    pub complete: bool,
}

impl<'a> Snapshot<'a> {
    pub fn of(state: &'a PuzzleState) -> Self {
        Snapshot {
            level_index: state.level_index(),
            width: state.width(),
            height: state.height(),
            player: state.player(),
            walls: state.walls(),
            targets: state.targets(),
            crates: state.crates(),
            complete: state.is_complete(),
        }
    }
}

pub fn get_json_data(state: &PuzzleState) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&Snapshot::of(state))?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::parse_level_rows;

    #[test]
    fn snapshot_lists_entities_in_position_order() {
        let state = parse_level_rows(&["#@$.#"], 2);
        let json: serde_json::Value = serde_json::from_str(&get_json_data(&state).unwrap()).unwrap();

        assert_eq!(json["level_index"], 2);
        assert_eq!(json["width"], 5);
        assert_eq!(json["player"], serde_json::json!({ "x": 1, "y": 0 }));
        assert_eq!(json["crates"], serde_json::json!([{ "x": 2, "y": 0 }]));
        assert_eq!(
            json["walls"],
            serde_json::json!([{ "x": 0, "y": 0 }, { "x": 4, "y": 0 }])
        );
        assert_eq!(json["complete"], false);
    }
}
