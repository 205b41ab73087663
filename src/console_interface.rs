use crate::core::{Cell, Direction, Level, Tile, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    let enter = || -> Result<_, Box<dyn std::error::Error>> {
        crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        Ok(Terminal::new(backend)?)
    };
    let entered = enter();
    if entered.is_err() {
        // leave raw mode, the setup error is the one worth reporting
        let _ = cleanup_terminal();
    }
    entered
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `run`, then `cleanup` whatever happened. An error from `run` wins over one from `cleanup`.
pub fn run_then_cleanup<T>(
    run: impl FnOnce() -> Result<T, Box<dyn std::error::Error>>,
    cleanup: impl FnOnce() -> Result<(), Box<dyn std::error::Error>>,
) -> Result<T, Box<dyn std::error::Error>> {
    let result = run();
    let cleaned = cleanup();
    let value = result?;
    cleaned?;
    Ok(value)
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = status_lines(state);
    let status_height = status.len() as u16 + 2;
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(status_height)])
            .split(f.area());

        // Game area
        let game_paragraph = Paragraph::new(render_level_to_lines(state.level))
            .block(Block::default().borders(Borders::ALL).title("Crates"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        // Instructions
        let instruction_paragraph = Paragraph::new(status.join("\n"))
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// Text of the instructions block: controls and progress, then one line per load warning.
pub fn status_lines(state: &GameRenderState) -> Vec<String> {
    let instructions = if state.won {
        "You Win! Press any key to quit."
    } else {
        "Controls: arrows, HJKL or WASD to move, Q to quit"
    };

    let mut first = format!(
        "{} | Crates on goals: {}/{}",
        instructions,
        state.level.count_crates_on_goals(),
        state.level.crates.len()
    );
    if state.blocked {
        first.push_str(" | Blocked");
    } else if let Some(change_type) = &state.last_change {
        first.push_str(&format!(" | Last: {:?}", change_type));
    }

    let mut lines = vec![first];
    lines.extend(state.warnings.iter().map(|w| format!("Warning: {}", w)));
    lines
}

pub fn tile_glyph(tile: Tile) -> &'static str {
    match tile {
        Tile::Player => "()",
        Tile::Crate { .. } => "[]",
        Tile::Terrain(Cell::Goal) => "<>",
        Tile::Terrain(Cell::Free) => "..",
        Tile::Terrain(Cell::Solid) => "##",
    }
}

fn tile_style(tile: Tile) -> Style {
    match tile {
        Tile::Player => Style::default().fg(Color::Yellow),
        Tile::Crate { on_goal: true } => Style::default().fg(Color::Green),
        Tile::Crate { on_goal: false } => Style::default().fg(Color::Magenta),
        Tile::Terrain(Cell::Goal) => Style::default().fg(Color::Red),
        Tile::Terrain(_) => Style::default(),
    }
}

fn render_level_to_lines(level: &Level) -> Vec<Line<'static>> {
    level
        .render()
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|tile| Span::styled(tile_glyph(tile), tile_style(tile)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

pub fn render_level_to_string(level: &Level) -> String {
    let mut result = String::new();
    for row in level.render() {
        for tile in row {
            result.push_str(tile_glyph(tile));
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn key_to_input(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input(poll_interval: Duration) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(poll_interval)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(key_to_input(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}
