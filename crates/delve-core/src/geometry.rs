//! Positions, directions and the distance metric
//!
//! Every range check in the game (monster detection, sight radius) uses
//! Manhattan distance, so the lit area around the player is a diamond.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A tile coordinate on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position
    pub const fn distance(&self, other: Position) -> i32 {
        distance(self.x, self.y, other.x, other.y)
    }

    /// The neighbouring position one step in `dir`
    pub const fn step(&self, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbours, in N/S/W/E order
    pub fn neighbors(&self) -> [Position; 4] {
        [
            self.step(Direction::North),
            self.step(Direction::South),
            self.step(Direction::West),
            self.step(Direction::East),
        ]
    }
}

/// Manhattan distance: |dx| + |dy|
pub const fn distance(x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// The four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Get direction from delta values
    pub const fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    /// Get the opposite direction
    pub const fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}
