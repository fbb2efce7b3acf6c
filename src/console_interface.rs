use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

use crate::core::{
    BlockReason, Command, Direction, LEVEL_COUNT, MoveOutcome, Session, render_to_string,
};
use crate::error::AppError;

pub type ConsoleTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub enum ConsoleInput {
    Command(Command),
    Quit,
    Timeout,
}

pub fn setup_terminal() -> Result<ConsoleTerminal, AppError> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), AppError> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_session(terminal: &mut ConsoleTerminal, session: &Session) -> Result<(), AppError> {
    let state = session.state();
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let title = format!("Level {} / {}", state.level_index() + 1, LEVEL_COUNT);
        let game_paragraph = Paragraph::new(render_to_string(state))
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status_paragraph = Paragraph::new(status_line(session))
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(if session.is_complete() {
                Color::Green
            } else {
                Color::Cyan
            }))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn status_line(session: &Session) -> String {
    let state = session.state();
    let progress = format!(
        "Crates on targets: {}/{}",
        state.crates_on_targets(),
        state.targets().len()
    );

    let headline = if session.is_complete() {
        "Level complete! N: next level, R: replay, Q: quit".to_string()
    } else {
        "WASD/arrows: move, N/P: next/previous, R: reload, Q: quit".to_string()
    };

    match session.last_outcome().and_then(describe_outcome) {
        Some(note) => format!("{} | {} | {}", headline, progress, note),
        None => format!("{} | {}", headline, progress),
    }
}

fn describe_outcome(outcome: MoveOutcome) -> Option<&'static str> {
    match outcome {
        MoveOutcome::Pushed { .. } => Some("Pushed a crate"),
        MoveOutcome::Blocked(BlockReason::Wall) => Some("A wall is in the way"),
        MoveOutcome::Blocked(BlockReason::WallBehindCrate) => Some("The crate is against a wall"),
        MoveOutcome::Blocked(BlockReason::CrateBehindCrate) => Some("Two crates are too heavy"),
        MoveOutcome::Blocked(BlockReason::OutOfBounds) => Some("That leads off the map"),
        MoveOutcome::Moved | MoveOutcome::Ignored => None,
    }
}

/// Maps a key to an engine command. Keys without a meaning become an ignored move.
pub fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::Command(Command::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::Command(Command::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::Command(Command::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::Command(Command::Move(Direction::Right))
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char(']') => {
            ConsoleInput::Command(Command::NextLevel)
        }
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char('[') => {
            ConsoleInput::Command(Command::PreviousLevel)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Command(Command::ReloadLevel),
        _ => ConsoleInput::Command(Command::Move(Direction::Ignore)),
    }
}

pub fn handle_input() -> Result<ConsoleInput, AppError> {
    if event::poll(Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(input_from_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}

/// Plays the session in the terminal, restoring the terminal however the session ends.
pub fn play(session: &mut Session) -> Result<(), AppError> {
    with_terminal(setup_terminal, |terminal| run_interactive(terminal, session), cleanup_terminal)
}

/// Cleanup runs even when setup fails part way. A session error takes precedence over a
/// cleanup error.
fn with_terminal<T>(
    setup: impl FnOnce() -> Result<T, AppError>,
    run: impl FnOnce(&mut T) -> Result<(), AppError>,
    cleanup: impl FnOnce() -> Result<(), AppError>,
) -> Result<(), AppError> {
    let result = setup().and_then(|mut terminal| run(&mut terminal));
    let cleaned = cleanup();
    result.and(cleaned)
}

/// Runs the interactive loop until the player quits.
pub fn run_interactive(terminal: &mut ConsoleTerminal, session: &mut Session) -> Result<(), AppError> {
    render_session(terminal, session)?;
    loop {
        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::Command(command) => {
                session.apply(command);
                render_session(terminal, session)?;
            }
            ConsoleInput::Timeout => {}
        }
    }
    Ok(())
}
