use crate::core::bounded_grid::BoundedGrid;

/// Static terrain of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Free,
    Solid,
    Goal,
}

/// Column `x`, row `y`, origin at the top left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
}

/// The terrain plus everything standing on it.
///
/// Crates are only ever identified by their position; their order in
/// `crates` carries no meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub(crate) grid: BoundedGrid<Cell>,
    pub player: Vec2,
    pub crates: Vec<Vec2>,
}

/// What occupies a cell once the player and crates are drawn over the terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Player,
    Crate { on_goal: bool },
    Terrain(Cell),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameUpdate {
    Moved(GameChangeType),
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndCratesMove { crates: usize },
}
