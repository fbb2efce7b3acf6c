// Turn-based crate pushing puzzle engine.
// Tiles: '#' wall, '@' player, '$' crate, '.' target, '*' crate on target, ' ' floor.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod export;
pub mod logging;

#[cfg(test)]
mod test;
