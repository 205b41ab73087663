use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::{Cell, Direction, Level, Tile, UserAction, Vec2};

impl Level {
    pub fn new(grid: BoundedGrid<Cell>, player: Vec2, crates: Vec<Vec2>) -> Level {
        Level {
            grid,
            player,
            crates,
        }
    }

    pub fn bounds(&self) -> BoundsOriginRoot {
        self.grid.size()
    }

    pub fn height(&self) -> i32 {
        self.grid.size().extent.y
    }

    pub fn width(&self) -> i32 {
        self.grid.size().extent.x
    }

    /// Terrain at `pos`, or `None` when `pos` lies off the grid.
    pub fn cell_at(&self, pos: &Vec2) -> Option<Cell> {
        self.grid.get(pos).copied()
    }

    pub fn crate_at(&self, pos: &Vec2) -> Option<&Vec2> {
        self.crates.iter().find(|&c| c == pos)
    }

    pub fn crate_index_at(&self, pos: &Vec2) -> Option<usize> {
        self.crates.iter().position(|c| c == pos)
    }

    pub fn tile_at(&self, pos: &Vec2) -> Tile {
        if *pos == self.player {
            Tile::Player
        } else if self.crate_at(pos).is_some() {
            Tile::Crate {
                on_goal: self.cell_at(pos) == Some(Cell::Goal),
            }
        } else {
            Tile::Terrain(self.cell_at(pos).unwrap_or(Cell::Solid))
        }
    }

    /// One row of tiles per grid row, player drawn over crates over terrain.
    pub fn render(&self) -> Vec<Vec<Tile>> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| self.tile_at(&Vec2 { x, y }))
                    .collect()
            })
            .collect()
    }

    pub fn goal_count(&self) -> usize {
        self.grid.iter().filter(|&(_, &c)| c == Cell::Goal).count()
    }

    pub fn count_crates_on_goals(&self) -> usize {
        self.crates
            .iter()
            .filter(|c| self.cell_at(c) == Some(Cell::Goal))
            .count()
    }
}

impl Direction {
    pub fn offset(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }
}

impl UserAction {
    pub fn all_actions() -> Vec<UserAction> {
        vec![
            UserAction::Move(Direction::Up),
            UserAction::Move(Direction::Down),
            UserAction::Move(Direction::Left),
            UserAction::Move(Direction::Right),
        ]
    }
}
