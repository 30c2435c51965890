//! The level map grid

use serde::{Deserialize, Serialize};

use super::{Room, Tile};
use crate::geometry::Position;
use crate::{MAP_HEIGHT, MAP_WIDTH};

/// Create default cells grid (solid rock)
fn default_cells() -> Vec<Vec<Tile>> {
    vec![vec![Tile::Wall; MAP_HEIGHT]; MAP_WIDTH]
}

/// Level map, indexed `cells[x][y]`
///
/// There is exactly one map per session; descending overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    cells: Vec<Vec<Tile>>,
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl Map {
    /// A map made entirely of wall
    pub fn new() -> Self {
        Self {
            cells: default_cells(),
        }
    }

    pub const fn width(&self) -> usize {
        MAP_WIDTH
    }

    pub const fn height(&self) -> usize {
        MAP_HEIGHT
    }

    /// Check if position is on the map
    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < MAP_WIDTH && (pos.y as usize) < MAP_HEIGHT
    }

    /// Tile at position, `None` off the map
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[pos.x as usize][pos.y as usize])
    }

    /// Set the tile at a position; off-map writes are ignored
    pub fn set(&mut self, pos: Position, tile: Tile) {
        if self.in_bounds(pos) {
            self.cells[pos.x as usize][pos.y as usize] = tile;
        }
    }

    /// In bounds and not a wall
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tile(pos).is_some_and(|t| t.is_walkable())
    }

    /// Plain floor, the only tile entities may be spawned on
    pub fn is_floor(&self, pos: Position) -> bool {
        self.tile(pos) == Some(Tile::Floor)
    }

    /// Overwrite every cell
    pub fn fill(&mut self, tile: Tile) {
        for col in &mut self.cells {
            col.fill(tile);
        }
    }

    /// Carve a room to floor
    pub fn carve_room(&mut self, room: &Room) {
        for pos in room.tiles() {
            self.set(pos, Tile::Floor);
        }
    }

    /// Carve a horizontal run of floor at row `y`, inclusive of both ends
    pub fn carve_h_line(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.set(Position::new(x, y), Tile::Floor);
        }
    }

    /// Carve a vertical run of floor at column `x`, inclusive of both ends
    pub fn carve_v_line(&mut self, y1: i32, y2: i32, x: i32) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.set(Position::new(x, y), Tile::Floor);
        }
    }

    /// Iterate over every position holding `tile`
    pub fn positions_of(&self, tile: Tile) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(move |(x, col)| {
            col.iter()
                .enumerate()
                .filter(move |(_, t)| **t == tile)
                .map(move |(y, _)| Position::new(x as i32, y as i32))
        })
    }

    /// Count tiles of a given kind
    pub fn count(&self, tile: Tile) -> usize {
        self.positions_of(tile).count()
    }

    /// Render one row as symbols (handy in tests and logs)
    pub fn row_string(&self, y: usize) -> String {
        (0..MAP_WIDTH).map(|x| self.cells[x][y].symbol()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_solid() {
        let map = Map::new();
        assert_eq!(map.count(Tile::Wall), MAP_WIDTH * MAP_HEIGHT);
        assert!(!map.is_walkable(Position::new(10, 10)));
    }

    #[test]
    fn test_bounds() {
        let map = Map::new();
        assert!(map.in_bounds(Position::new(0, 0)));
        assert!(map.in_bounds(Position::new(MAP_WIDTH as i32 - 1, MAP_HEIGHT as i32 - 1)));
        assert!(!map.in_bounds(Position::new(-1, 0)));
        assert!(!map.in_bounds(Position::new(MAP_WIDTH as i32, 0)));
        assert_eq!(map.tile(Position::new(0, -1)), None);
        assert!(!map.is_walkable(Position::new(0, MAP_HEIGHT as i32)));
    }

    #[test]
    fn test_carve_lines_either_order() {
        let mut map = Map::new();
        map.carve_h_line(10, 5, 3);
        map.carve_v_line(8, 2, 20);
        for x in 5..=10 {
            assert!(map.is_floor(Position::new(x, 3)));
        }
        for y in 2..=8 {
            assert!(map.is_floor(Position::new(20, y)));
        }
        assert_eq!(map.count(Tile::Floor), 6 + 7);
    }

    #[test]
    fn test_out_of_bounds_set_ignored() {
        let mut map = Map::new();
        map.set(Position::new(-5, 2), Tile::Floor);
        assert_eq!(map.count(Tile::Floor), 0);
    }
}
