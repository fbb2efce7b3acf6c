use std::collections::BTreeSet;

use tracing::warn;

use crate::core::consts::{CRATE, CRATE_ON_TARGET, PLAYER, TARGET, WALL};
use crate::core::navigation::clamp_catalog_index;
use crate::core::{Position, PuzzleState};
use crate::error::LevelError;

/// Builds a puzzle state from level rows.
///
/// Rows may have different lengths; the shorter ones count as padded with floor. Unknown
/// characters are floor. A level without a player marker starts the player at the origin.
pub fn parse_level_rows<S: AsRef<str>>(rows: &[S], level_index: usize) -> PuzzleState {
    let mut walls = BTreeSet::new();
    let mut targets = BTreeSet::new();
    let mut crates = BTreeSet::new();
    let mut player = None;
    let mut width = 0;

    for (y, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        width = width.max(line.chars().count());
        for (x, ch) in line.chars().enumerate() {
            let pos = Position::new(x as i32, y as i32);
            match ch {
                WALL => {
                    walls.insert(pos);
                }
                TARGET => {
                    targets.insert(pos);
                }
                CRATE => {
                    crates.insert(pos);
                }
                CRATE_ON_TARGET => {
                    crates.insert(pos);
                    targets.insert(pos);
                }
                PLAYER => {
                    // last marker wins; strict parsing reports duplicates
                    player = Some(pos);
                }
                _ => {}
            }
        }
    }

    PuzzleState {
        walls,
        targets,
        crates,
        player: player.unwrap_or(Position::ORIGIN),
        width: width as i32,
        height: rows.len() as i32,
        level_index: clamp_catalog_index(level_index),
    }
}

/// Parses a multi-line level, ignoring blank lines around the grid.
pub fn parse_level_str(s: &str, level_index: usize) -> PuzzleState {
    let rows = trimmed_rows(s);
    parse_level_rows(&rows, level_index)
}

/// Like [`parse_level_rows`], but rejects levels with authoring defects.
pub fn parse_level_strict<S: AsRef<str>>(
    rows: &[S],
    level_index: usize,
) -> Result<PuzzleState, LevelError> {
    let state = parse_level_rows(rows, level_index);
    validate_rows(rows, &state)?;
    Ok(state)
}

fn validate_rows<S: AsRef<str>>(rows: &[S], state: &PuzzleState) -> Result<(), LevelError> {
    let players = rows
        .iter()
        .map(|row| row.as_ref().chars().filter(|&c| c == PLAYER).count())
        .sum::<usize>();
    let level = state.level_index;
    match players {
        0 => return Err(LevelError::MissingPlayer { level }),
        1 => {}
        found => return Err(LevelError::MultiplePlayers { level, found }),
    }
    if state.crates.is_empty() {
        return Err(LevelError::NoCrates { level });
    }
    if state.crates.len() != state.targets.len() {
        return Err(LevelError::CrateTargetMismatch {
            level,
            crates: state.crates.len(),
            targets: state.targets.len(),
        });
    }
    Ok(())
}

/// Checks a level in its text form, logging a warning when it is defective.
pub fn validate_level<S: AsRef<str>>(rows: &[S], level_index: usize) -> Result<(), LevelError> {
    let result = parse_level_strict(rows, level_index).map(|_| ());
    if let Err(err) = &result {
        warn!(level = level_index, error = %err, "level failed validation");
    }
    result
}

fn trimmed_rows(s: &str) -> Vec<&str> {
    let lines: Vec<&str> = s.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].to_vec(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn parses_entities_by_column_and_row() {
        let state = parse_level_rows(&["#####", "#@$.#", "#####"], 0);

        assert_eq!(state.player(), pos(1, 1));
        assert_eq!(state.crates().iter().copied().collect::<Vec<_>>(), vec![pos(2, 1)]);
        assert_eq!(state.targets().iter().copied().collect::<Vec<_>>(), vec![pos(3, 1)]);
        assert_eq!(state.walls().len(), 12);
        assert_eq!(state.width(), 5);
        assert_eq!(state.height(), 3);
    }

    #[test]
    fn crate_on_target_is_both_crate_and_target() {
        let state = parse_level_rows(&["#@*#"], 3);

        assert!(state.crates().contains(&pos(2, 0)));
        assert!(state.targets().contains(&pos(2, 0)));
        assert_eq!(state.level_index(), 3);
    }

    #[test]
    fn short_rows_are_padded_and_width_uses_longest_row() {
        let state = parse_level_rows(&["###", "#@$.  #", "#"], 0);

        assert_eq!(state.width(), 7);
        assert_eq!(state.height(), 3);
        assert!(!state.walls().contains(&pos(5, 2)));
    }

    #[test]
    fn unknown_characters_are_floor() {
        let state = parse_level_rows(&["#@x-_+$.#"], 0);

        assert_eq!(state.walls().len(), 2);
        assert_eq!(state.crates().len(), 1);
        assert_eq!(state.targets().len(), 1);
        assert_eq!(state.player(), pos(1, 0));
    }

    #[test]
    fn missing_player_defaults_to_origin() {
        let state = parse_level_rows(&["  $.", "####"], 0);
        assert_eq!(state.player(), Position::ORIGIN);
    }

    #[test]
    fn level_index_is_clamped() {
        let state = parse_level_rows(&["@$."], 120);
        assert_eq!(state.level_index(), 49);

        let state = parse_level_rows(&["#@$.#"], usize::MAX);
        assert_eq!(state.level_index(), 49);

        let state = parse_level_rows(&["#@$.#"], 1usize << 63);
        assert_eq!(state.level_index(), 49);
    }

    #[test]
    fn parse_str_skips_surrounding_blank_lines() {
        let state = parse_level_str(
            r#"
####
#@$.#
####
"#,
            0,
        );
        assert_eq!(state.height(), 3);
        assert_eq!(state.player(), pos(1, 1));
    }

    #[test]
    fn strict_parse_rejects_missing_player() {
        let err = parse_level_strict(&["#$.#"], 4).unwrap_err();
        assert_eq!(err, LevelError::MissingPlayer { level: 4 });
    }

    #[test]
    fn strict_parse_rejects_two_players() {
        let err = parse_level_strict(&["#@@$.#"], 0).unwrap_err();
        assert_eq!(err, LevelError::MultiplePlayers { level: 0, found: 2 });
    }

    #[test]
    fn strict_parse_rejects_unbalanced_crates() {
        let err = parse_level_strict(&["#@$$.#"], 0).unwrap_err();
        assert_eq!(
            err,
            LevelError::CrateTargetMismatch {
                level: 0,
                crates: 2,
                targets: 1
            }
        );
    }

    #[test]
    fn strict_parse_rejects_empty_level() {
        let err = parse_level_strict(&["#@ #"], 0).unwrap_err();
        assert_eq!(err, LevelError::NoCrates { level: 0 });
    }
}
