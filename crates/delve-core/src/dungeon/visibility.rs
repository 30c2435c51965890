//! Explored-tile tracking
//!
//! Sight is a plain radius check with no line-of-sight: every tile within
//! Manhattan distance `radius` of the player is lit, walls included.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;
use crate::{MAP_HEIGHT, MAP_WIDTH};

/// Create default explored grid (all false)
fn default_explored() -> Vec<Vec<bool>> {
    vec![vec![false; MAP_HEIGHT]; MAP_WIDTH]
}

/// Per-level record of which tiles the player has seen, indexed `[x][y]`
///
/// Monotonic within a level; only [`VisibilityGrid::reset`] clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityGrid {
    explored: Vec<Vec<bool>>,
}

impl Default for VisibilityGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityGrid {
    pub fn new() -> Self {
        Self {
            explored: default_explored(),
        }
    }

    /// Forget everything (new level)
    pub fn reset(&mut self) {
        for col in &mut self.explored {
            col.fill(false);
        }
    }

    /// Check if a cell has been explored
    pub fn is_explored(&self, pos: Position) -> bool {
        if !in_bounds(pos) {
            return false;
        }
        self.explored[pos.x as usize][pos.y as usize]
    }

    /// Mark a cell as explored
    pub fn set_explored(&mut self, pos: Position) {
        if in_bounds(pos) {
            self.explored[pos.x as usize][pos.y as usize] = true;
        }
    }

    /// OR the diamond of radius `radius` around `center` into the grid
    pub fn reveal_around(&mut self, center: Position, radius: i32) {
        if radius < 0 {
            return;
        }
        for dy in -radius..=radius {
            let span = radius - dy.abs();
            for dx in -span..=span {
                self.set_explored(Position::new(center.x + dx, center.y + dy));
            }
        }
    }

    /// Number of explored cells
    pub fn explored_count(&self) -> usize {
        self.explored.iter().flatten().filter(|e| **e).count()
    }
}

/// Whether `pos` is currently lit for a viewer at `viewer`
pub fn is_in_sight(viewer: Position, radius: i32, pos: Position) -> bool {
    viewer.distance(pos) <= radius
}

const fn in_bounds(pos: Position) -> bool {
    pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < MAP_WIDTH && (pos.y as usize) < MAP_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_initial_state() {
        let grid = VisibilityGrid::new();
        assert!(!grid.is_explored(Position::new(10, 10)));
        assert_eq!(grid.explored_count(), 0);
    }

    #[test]
    fn test_reveal_is_a_diamond() {
        let mut grid = VisibilityGrid::new();
        let c = Position::new(50, 25);
        grid.reveal_around(c, 3);

        assert!(grid.is_explored(Position::new(53, 25)));
        assert!(grid.is_explored(Position::new(51, 23)));
        // Corner of the bounding square is outside the diamond
        assert!(!grid.is_explored(Position::new(53, 28)));
        assert!(!grid.is_explored(Position::new(52, 23)));
        // 2r^2 + 2r + 1 cells
        assert_eq!(grid.explored_count(), 25);
    }

    #[test]
    fn test_reveal_clips_at_edges() {
        let mut grid = VisibilityGrid::new();
        grid.reveal_around(Position::new(0, 0), 2);
        // Only the quadrant inside the map: 6 cells
        assert_eq!(grid.explored_count(), 6);
    }

    #[test]
    fn test_explored_persists_until_reset() {
        let mut grid = VisibilityGrid::new();
        grid.reveal_around(Position::new(10, 10), 2);
        grid.reveal_around(Position::new(40, 10), 2);
        assert!(grid.is_explored(Position::new(10, 10)));
        assert!(grid.is_explored(Position::new(40, 10)));

        grid.reset();
        assert_eq!(grid.explored_count(), 0);
    }

    #[test]
    fn test_in_sight() {
        let viewer = Position::new(5, 5);
        assert!(is_in_sight(viewer, 8, Position::new(9, 9)));
        assert!(!is_in_sight(viewer, 8, Position::new(10, 9)));
    }
}
