// Crate-pushing puzzle in the terminal, with ratatui
// Controls: arrow keys, H/J/K/L or W/A/S/D (immediate response). Q to quit.
// Level files: 'x' solid, '.' free, 'f' goal, 's' player start, 'c' crate.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crate_pusher::config::GameConfig;
use crate_pusher::console_interface::ConsoleInput::*;
use crate_pusher::console_interface::{
    cleanup_terminal, handle_input, render_game, run_then_cleanup, setup_terminal,
};
use crate_pusher::core::{GameUpdate, Level, step};
use crate_pusher::level_file::{LoadWarning, load_level};
use crate_pusher::logging;
use crate_pusher::models::GameRenderState;
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

#[derive(Parser, Debug)]
#[command(version, about = "Push every crate onto a goal")]
struct Args {
    /// Level file to play
    level: Option<PathBuf>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write log records to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Largest accepted level width and height
    #[arg(long)]
    max_size: Option<usize>,
}

/// Exit code for a missing level argument or a level that fails to load.
const LOAD_FAILURE: u8 = 1;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level_path = match require_level(args.level) {
        Ok(path) => path,
        Err(code) => return Ok(ExitCode::from(code)),
    };

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(log_file) = args.log_file {
        config.log_file = Some(log_file);
    }
    if let Some(max_size) = args.max_size {
        config.max_level_size = max_size;
    }

    if let Some(log_file) = &config.log_file {
        logging::init(log_file, config.level_filter()?)?;
    }

    let loaded = match load_level(&level_path, config.max_level_size) {
        Ok(loaded) => loaded,
        Err(err) => {
            println!("Error loading level \"{}\": {}", level_path.display(), err);
            return Ok(ExitCode::from(LOAD_FAILURE));
        }
    };

    let mut terminal = setup_terminal()?;
    run_then_cleanup(
        || run_interactive(loaded.level, &loaded.warnings, &config, &mut terminal),
        cleanup_terminal,
    )?;

    Ok(ExitCode::SUCCESS)
}

fn require_level(level: Option<PathBuf>) -> Result<PathBuf, u8> {
    level.ok_or_else(|| {
        println!("No level specified.");
        LOAD_FAILURE
    })
}

fn run_interactive(
    level: Level,
    warnings: &[LoadWarning],
    config: &GameConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut level = level;
    let poll_interval = config.poll_interval();

    // Initial render
    render_game(
        terminal,
        &GameRenderState {
            level: &level,
            warnings,
            won: level.is_won(),
            blocked: false,
            last_change: None,
        },
    )?;
    if level.is_won() {
        info!("level is already solved");
        wait_for_any_key(config)?;
        return Ok(());
    }

    loop {
        match handle_input(poll_interval)? {
            Quit => {
                info!("quit");
                break;
            }
            UserAction(user_action) => {
                let update = step(&mut level, user_action);
                let won = level.is_won();
                render_game(
                    terminal,
                    &GameRenderState {
                        level: &level,
                        warnings,
                        won,
                        blocked: update == GameUpdate::Blocked,
                        last_change: match update {
                            GameUpdate::Moved(change) => Some(change),
                            GameUpdate::Blocked => None,
                        },
                    },
                )?;

                if won {
                    info!("level solved");
                    // Keep showing the win screen until user inputs
                    wait_for_any_key(config)?;
                    break;
                }
            }
            Timeout | Unknown => {
                // No input, continue polling
            }
        }
    }

    Ok(())
}

fn wait_for_any_key(config: &GameConfig) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match handle_input(config.poll_interval())? {
            Timeout => {}
            _ => return Ok(()),
        }
    }
}
