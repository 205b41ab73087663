/// Default bound on both sides of a level, in cells.
pub const LEVEL_SIZE: i32 = 10;
