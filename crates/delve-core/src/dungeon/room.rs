//! Rectangular rooms
//!
//! Rooms only live for the duration of level generation: they drive corridor
//! carving, the player start, stairs and boss placement, then are dropped.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;

/// An axis-aligned room, `x..x+width` by `y..y+height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center tile (integer division rounds towards the origin)
    pub const fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Bounding boxes share at least one tile
    pub const fn overlaps(&self, other: &Room) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Check if a position lies inside the room
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x
            && pos.x < self.x + self.width
            && pos.y >= self.y
            && pos.y < self.y + self.height
    }

    /// Iterate over every tile of the room
    pub fn tiles(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let room = Room::new(10, 20, 5, 4);
        assert_eq!(room.center(), Position::new(12, 22));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Room::new(0, 0, 5, 5);
        let b = Room::new(4, 4, 5, 5);
        let c = Room::new(5, 0, 5, 5);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Touching edges do not overlap
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_tiles_cover_area() {
        let room = Room::new(3, 3, 6, 4);
        let tiles: Vec<_> = room.tiles().collect();
        assert_eq!(tiles.len(), 24);
        assert!(tiles.iter().all(|p| room.contains(*p)));
    }
}
