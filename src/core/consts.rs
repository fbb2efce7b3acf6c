/// Number of levels in the built-in catalog.
pub const LEVEL_COUNT: usize = 50;
pub const FIRST_LEVEL: usize = 0;
pub const LAST_LEVEL: usize = LEVEL_COUNT - 1;

pub const WALL: char = '#';
pub const TARGET: char = '.';
pub const CRATE: char = '$';
pub const CRATE_ON_TARGET: char = '*';
pub const PLAYER: char = '@';
/// Only produced when rendering; the parser treats it as floor.
pub const PLAYER_ON_TARGET: char = '+';
pub const FLOOR: char = ' ';
