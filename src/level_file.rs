//! Level text format: one character per cell, one line per row.
//!
//! | symbol | meaning                    |
//! |--------|----------------------------|
//! | `x`    | solid                      |
//! | `.`    | free                       |
//! | `f`    | goal                       |
//! | `s`    | player start, on free      |
//! | `c`    | crate start, on free       |

use std::path::Path;

use log::{info, warn};

use crate::core::{BoundedGrid, BoundsOriginRoot, Cell, LEVEL_SIZE, Level, Vec2};
use crate::error::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadWarning {
    /// More crates than goals, the level can never be won.
    MoreCratesThanGoals { crates: usize, goals: usize },
    /// Some non-solid cell touches the outer edge of the grid.
    OpenBorder,
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadWarning::MoreCratesThanGoals { crates, goals } => {
                write!(f, "{} crates but only {} goals, level cannot be won", crates, goals)
            }
            LoadWarning::OpenBorder => write!(f, "level border is open, grid edge blocks moves"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedLevel {
    pub level: Level,
    pub warnings: Vec<LoadWarning>,
}

pub fn load_level(path: &Path, max_side: usize) -> Result<LoadedLevel, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = parse_level_bounded(&text, max_side)?;
    info!(
        "loaded {} ({}x{}, {} crate(s), {} goal(s))",
        path.display(),
        loaded.level.width(),
        loaded.level.height(),
        loaded.level.crates.len(),
        loaded.level.goal_count()
    );
    Ok(loaded)
}

pub fn parse_level(s: &str) -> Result<LoadedLevel, LoadError> {
    parse_level_bounded(s, LEVEL_SIZE as usize)
}

pub fn parse_level_bounded(s: &str, max_side: usize) -> Result<LoadedLevel, LoadError> {
    let rows: Vec<&str> = s
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .collect();

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }
    if rows.len() > max_side {
        return Err(LoadError::TooTall {
            height: rows.len(),
            max: max_side,
        });
    }

    let mut width = 0;
    for (row, line) in rows.iter().enumerate() {
        let row_width = line.chars().count();
        if row_width > max_side {
            return Err(LoadError::TooWide {
                row,
                width: row_width,
                max: max_side,
            });
        }
        width = width.max(row_width);
    }

    // short rows are padded with solid
    let bounds = BoundsOriginRoot::new(width as i32, rows.len() as i32);
    let mut grid = BoundedGrid::new(bounds, Cell::Solid);
    let mut player: Option<Vec2> = None;
    let mut crates: Vec<Vec2> = Vec::new();

    for (y, line) in rows.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let pos = Vec2 {
                x: x as i32,
                y: y as i32,
            };
            grid[&pos] = match ch {
                'x' => Cell::Solid,
                '.' => Cell::Free,
                'f' => Cell::Goal,
                's' => {
                    if let Some(first) = player {
                        return Err(LoadError::MultiplePlayers { first, second: pos });
                    }
                    player = Some(pos);
                    Cell::Free
                }
                'c' => {
                    crates.push(pos);
                    Cell::Free
                }
                symbol => return Err(LoadError::UnknownSymbol { symbol, x, y }),
            };
        }
    }

    let player = player.ok_or(LoadError::MissingPlayer)?;
    let level = Level::new(grid, player, crates);
    let warnings = check_level(&level);
    for warning in &warnings {
        warn!("{}", warning);
    }

    Ok(LoadedLevel { level, warnings })
}

fn check_level(level: &Level) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();

    let goals = level.goal_count();
    if level.crates.len() > goals {
        warnings.push(LoadWarning::MoreCratesThanGoals {
            crates: level.crates.len(),
            goals,
        });
    }

    let bounds = level.bounds();
    let open = level
        .grid
        .iter()
        .any(|(pos, &c)| c != Cell::Solid && bounds.is_on_edge(&pos));
    if open {
        warnings.push(LoadWarning::OpenBorder);
    }

    warnings
}
