use crate::core::{GameChangeType, Level};
use crate::level_file::LoadWarning;

pub struct GameRenderState<'a> {
    pub level: &'a Level,
    pub warnings: &'a [LoadWarning],
    pub won: bool,
    pub blocked: bool,
    pub last_change: Option<GameChangeType>,
}
