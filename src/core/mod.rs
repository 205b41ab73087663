mod bounded_grid;
mod bounds;
mod consts;
mod model_helpers;
mod models;
mod update;
mod win;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use models::{Cell, Direction, GameChangeType, GameUpdate, Level, Tile, UserAction, Vec2};
pub use update::step;
pub use win::is_won;
