//! Level generation
//!
//! Rooms are dropped at random and kept only if they do not overlap an
//! earlier room; consecutive rooms are then joined with L-shaped corridors.

use log::debug;

use super::{Map, Room, Tile, VisibilityGrid};
use crate::geometry::Position;
use crate::rng::GameRng;
use crate::{
    FINAL_DUNGEON_LEVEL, MAP_HEIGHT, MAP_WIDTH, MAX_ROOMS, ROOM_MAX_HEIGHT, ROOM_MAX_WIDTH,
    ROOM_MIN_HEIGHT, ROOM_MIN_WIDTH,
};

/// Layout facts the rest of the level setup needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLayout {
    /// Accepted rooms in placement order
    pub rooms: Vec<Room>,
    /// Where the player starts
    pub player_start: Position,
    /// Stairs down, if this level has any
    pub stairs: Option<Position>,
    /// Potion placed on this level
    pub potion: Option<Position>,
    /// Food placed on this level
    pub food: Option<Position>,
}

/// Build a fresh level, overwriting `map` and clearing `visibility`
pub fn generate_dungeon(
    map: &mut Map,
    visibility: &mut VisibilityGrid,
    dungeon_level: u32,
    rng: &mut GameRng,
) -> LevelLayout {
    map.fill(Tile::Wall);

    let rooms = place_rooms(map, rng);
    connect_rooms(map, &rooms);

    let player_start = match rooms.first() {
        Some(first) => first.center(),
        None => {
            // No room survived: open a single tile in the middle of the map
            let pos = Position::new(MAP_WIDTH as i32 / 2, MAP_HEIGHT as i32 / 2);
            map.set(pos, Tile::Floor);
            pos
        }
    };

    let potion = if rng.one_in(3) {
        place_item(map, Tile::Potion, player_start, rng)
    } else {
        None
    };
    let food = if rng.one_in(2) {
        place_item(map, Tile::Food, player_start, rng)
    } else {
        None
    };

    let stairs = match rooms.last() {
        Some(last) if rooms.len() > 1 && dungeon_level < FINAL_DUNGEON_LEVEL => {
            let pos = last.center();
            map.set(pos, Tile::StairsDown);
            Some(pos)
        }
        _ => None,
    };

    visibility.reset();

    debug!(
        "generated dungeon level {}: {} rooms, stairs {:?}",
        dungeon_level,
        rooms.len(),
        stairs
    );

    LevelLayout {
        rooms,
        player_start,
        stairs,
        potion,
        food,
    }
}

/// Try `MAX_ROOMS` random rooms, keeping the ones that fit
fn place_rooms(map: &mut Map, rng: &mut GameRng) -> Vec<Room> {
    let mut rooms: Vec<Room> = Vec::with_capacity(MAX_ROOMS);

    for _ in 0..MAX_ROOMS {
        let width = (rng.rn2(ROOM_MAX_WIDTH - ROOM_MIN_WIDTH + 1) + ROOM_MIN_WIDTH) as i32;
        let height = (rng.rn2(ROOM_MAX_HEIGHT - ROOM_MIN_HEIGHT + 1) + ROOM_MIN_HEIGHT) as i32;

        // Keep a one-tile wall border around the map
        let x = rng.rn2((MAP_WIDTH as i32 - width - 2) as u32) as i32 + 1;
        let y = rng.rn2((MAP_HEIGHT as i32 - height - 2) as u32) as i32 + 1;

        let room = Room::new(x, y, width, height);
        if rooms.iter().any(|r| room.overlaps(r)) {
            continue;
        }

        map.carve_room(&room);
        rooms.push(room);
    }

    rooms
}

/// Join room i to room i+1: horizontal leg on room i's row, vertical leg on
/// room i+1's column
fn connect_rooms(map: &mut Map, rooms: &[Room]) {
    for pair in rooms.windows(2) {
        let a = pair[0].center();
        let b = pair[1].center();
        map.carve_h_line(a.x, b.x, a.y);
        map.carve_v_line(a.y, b.y, b.x);
    }
}

/// Drop an item on a random floor tile other than `avoid`
///
/// Retries until it succeeds; returns `None` only when no such tile exists.
fn place_item(map: &mut Map, tile: Tile, avoid: Position, rng: &mut GameRng) -> Option<Position> {
    if !map.positions_of(Tile::Floor).any(|p| p != avoid) {
        return None;
    }
    loop {
        let (x, y) = rng.random_coord(MAP_WIDTH, MAP_HEIGHT);
        let pos = Position::new(x, y);
        if map.is_floor(pos) && pos != avoid {
            map.set(pos, tile);
            return Some(pos);
        }
    }
}
