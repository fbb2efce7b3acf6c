use tracing::info;

use crate::core::{
    Command, MoveOutcome, PuzzleState, load_level, next_level, previous_level, reload_level, step,
};

/// Owns the single active puzzle state and applies one command at a time.
pub struct Session {
    state: PuzzleState,
    last_outcome: Option<MoveOutcome>,
}

impl Session {
    pub fn new(level_index: i64) -> Self {
        Session {
            state: load_level(level_index),
            last_outcome: None,
        }
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Outcome of the most recent move; cleared by level transitions.
    pub fn last_outcome(&self) -> Option<MoveOutcome> {
        self.last_outcome
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Move(dir) => {
                let was_complete = self.state.is_complete();
                let result = step(&self.state, dir);
                self.state = result.state;
                self.last_outcome = Some(result.outcome);
                if !was_complete && self.state.is_complete() {
                    info!(level = self.state.level_index(), "level complete");
                }
            }
            Command::NextLevel => self.replace(next_level(&self.state)),
            Command::PreviousLevel => self.replace(previous_level(&self.state)),
            Command::ReloadLevel => self.replace(reload_level(&self.state)),
        }
    }

    fn replace(&mut self, state: PuzzleState) {
        info!(
            from = self.state.level_index(),
            to = state.level_index(),
            "level transition"
        );
        self.state = state;
        self.last_outcome = None;
    }
}
