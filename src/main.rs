// Terminal crate pushing puzzle.
// Controls: W/A/S/D or arrow keys to move, N/P to change level, R to reload, Q to quit.

use clap::Parser;
use tracing::{error, info};

use crate_pusher::config::{Args, Mode};
use crate_pusher::console_interface::play;
use crate_pusher::core::levels::level_rows;
use crate_pusher::core::{LEVEL_COUNT, Session, load_level, render_to_string, validate_level};
use crate_pusher::error::AppError;
use crate_pusher::export::get_json_data;
use crate_pusher::logging::init_logging;

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    init_logging(&args.log_file)?;
    info!(mode = ?args.mode(), level = args.level, "starting");

    match args.mode() {
        Mode::Play => run_play(args.level),
        Mode::Show => {
            print!("{}", render_to_string(&load_level(args.level)));
            Ok(())
        }
        Mode::Export => {
            println!("{}", get_json_data(&load_level(args.level))?);
            Ok(())
        }
        Mode::Check => run_check(),
    }
}

fn run_play(level: i64) -> Result<(), AppError> {
    let mut session = Session::new(level);
    let result = play(&mut session);
    if let Err(err) = &result {
        error!(error = %err, "interactive session failed");
    }
    result
}

fn run_check() -> Result<(), AppError> {
    let mut failed = 0;
    for index in 0..LEVEL_COUNT {
        match validate_level(level_rows(index), index) {
            Ok(()) => println!("level {:>2}: ok", index),
            Err(err) => {
                println!("level {:>2}: {}", index, err);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(AppError::InvalidCatalog {
            failed,
            total: LEVEL_COUNT,
        });
    }
    println!("all {} levels are valid", LEVEL_COUNT);
    Ok(())
}
