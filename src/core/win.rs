use crate::core::{Cell, Level};

/// True when every crate stands on a goal. A level without crates is won.
pub fn is_won(level: &Level) -> bool {
    level
        .crates
        .iter()
        .all(|c| level.cell_at(c) == Some(Cell::Goal))
}

impl Level {
    pub fn is_won(&self) -> bool {
        is_won(self)
    }
}
