use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "crate_pusher")]
#[command(about = "Push every crate onto a target", long_about = None)]
pub struct Args {
    /// Level to start on (0-based); out-of-range values are clamped
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub level: i64,

    /// File that receives the session log
    #[arg(long, value_name = "PATH", default_value = "crate_pusher.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Play interactively in the terminal
    Play,
    /// Print the starting layout of the level
    Show,
    /// Print the starting layout of the level as JSON
    Export,
    /// Validate every level in the catalog
    Check,
}

impl Args {
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or(Mode::Play)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_to_play_on_first_level() {
        let args = Args::parse_from(["crate_pusher"]);
        assert_eq!(args.mode(), Mode::Play);
        assert_eq!(args.level, 0);
        assert_eq!(args.log_file, PathBuf::from("crate_pusher.log"));
    }

    #[test]
    fn accepts_negative_level_and_subcommand() {
        let args = Args::parse_from(["crate_pusher", "--level", "-3", "show"]);
        assert_eq!(args.mode(), Mode::Show);
        assert_eq!(args.level, -3);
    }
}
