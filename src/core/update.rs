use log::{debug, trace};

use crate::core::{Cell, GameChangeType, GameUpdate, Level, UserAction, Vec2};

/// Something that can be displaced by a move. Both are just positions.
#[derive(Clone, Copy, Debug)]
enum Mover {
    Player,
    Crate(usize),
}

/// Applies `action` to `level` in place. A blocked move leaves the level untouched.
pub fn step(level: &mut Level, action: UserAction) -> GameUpdate {
    let UserAction::Move(direction) = action;
    let dir = direction.offset();

    match push(level, Mover::Player, dir) {
        Some(0) => {
            debug!("player moved {:?} to {:?}", direction, level.player);
            GameUpdate::Moved(GameChangeType::PlayerMove)
        }
        Some(crates) => {
            debug!(
                "player moved {:?} to {:?}, pushing {} crate(s)",
                direction, level.player, crates
            );
            GameUpdate::Moved(GameChangeType::PlayerAndCratesMove { crates })
        }
        None => {
            trace!("move {:?} from {:?} blocked", direction, level.player);
            GameUpdate::Blocked
        }
    }
}

/// Moves `mover` one step along `dir`, pushing any crate in the way first.
///
/// Returns the number of crates displaced, or `None` if the chain is blocked.
/// The far end of a chain moves before the near end, so a block anywhere
/// leaves every position as it was.
fn push(level: &mut Level, mover: Mover, dir: Vec2) -> Option<usize> {
    let target = position_of(level, mover) + dir;

    // off the grid counts as solid
    match level.cell_at(&target) {
        None | Some(Cell::Solid) => return None,
        Some(Cell::Free) | Some(Cell::Goal) => {}
    }

    let pushed = match level.crate_index_at(&target) {
        Some(index) => push(level, Mover::Crate(index), dir)? + 1,
        None => 0,
    };

    match mover {
        Mover::Player => level.player = target,
        Mover::Crate(index) => level.crates[index] = target,
    }
    Some(pushed)
}

fn position_of(level: &Level, mover: Mover) -> Vec2 {
    match mover {
        Mover::Player => level.player,
        Mover::Crate(index) => level.crates[index],
    }
}
