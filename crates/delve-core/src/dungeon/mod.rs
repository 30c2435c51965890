//! Dungeon system
//!
//! Contains the map grid, rooms, level generation and explored-tile tracking.

mod generation;
mod map;
mod room;
mod tile;
mod visibility;

pub use generation::{generate_dungeon, LevelLayout};
pub use map::Map;
pub use room::Room;
pub use tile::Tile;
pub use visibility::{is_in_sight, VisibilityGrid};
