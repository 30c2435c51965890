//! Map tile types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{S_FLOOR, S_FOOD, S_POTION, S_STAIRS_DOWN, S_WALL};

/// What occupies a single map square
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Tile {
    #[default]
    Wall,
    Floor,
    StairsDown,
    Potion,
    Food,
}

impl Tile {
    /// Display symbol
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Wall => S_WALL,
            Tile::Floor => S_FLOOR,
            Tile::StairsDown => S_STAIRS_DOWN,
            Tile::Potion => S_POTION,
            Tile::Food => S_FOOD,
        }
    }

    /// Parse a display symbol back into a tile
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            S_WALL => Some(Tile::Wall),
            S_FLOOR => Some(Tile::Floor),
            S_STAIRS_DOWN => Some(Tile::StairsDown),
            S_POTION => Some(Tile::Potion),
            S_FOOD => Some(Tile::Food),
            _ => None,
        }
    }

    /// Anything but a wall can be stepped on
    pub const fn is_walkable(&self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Items the player picks up by walking over them
    pub const fn is_item(&self) -> bool {
        matches!(self, Tile::Potion | Tile::Food)
    }
}
