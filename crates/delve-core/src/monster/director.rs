//! Level population
//!
//! Fills the roster for a freshly generated level: twenty scaled monsters
//! on ordinary levels, the boss alone on the final one.

use log::{debug, info};

use super::roster::{Monster, MonsterRoster};
use super::template::{BOSS_TEMPLATE, MONSTER_TEMPLATES};
use crate::dungeon::{Map, Room};
use crate::geometry::Position;
use crate::rng::GameRng;
use crate::{FINAL_DUNGEON_LEVEL, MAP_HEIGHT, MAP_WIDTH, MAX_MONSTERS, PLACEMENT_ATTEMPTS};

/// Repopulate `roster` for `dungeon_level`
pub fn populate_monsters(
    roster: &mut MonsterRoster,
    map: &Map,
    rooms: &[Room],
    player: Position,
    dungeon_level: u32,
    rng: &mut GameRng,
) {
    roster.clear();

    if dungeon_level == FINAL_DUNGEON_LEVEL {
        spawn_boss(roster, map, rooms, player, rng);
        return;
    }

    let level = dungeon_level as i32;
    for slot in 0..MAX_MONSTERS {
        let Some(template) = rng.choose(&MONSTER_TEMPLATES) else {
            break;
        };
        let mut monster = Monster::from_template(template, Position::default());
        monster.hp += 2 * level;
        monster.points += 5 * level;

        match find_spawn_tile(roster, map, player, rng) {
            Some(pos) => monster.pos = pos,
            None => {
                debug!("no room for {} in slot {}, leaving it inactive", monster.name, slot);
                monster.active = false;
            }
        }
        roster.spawn(monster);
    }

    debug!(
        "populated dungeon level {} with {} monsters",
        dungeon_level,
        roster.active_count()
    );
}

/// Put the boss in slot 0, preferring the centre of the last room
fn spawn_boss(
    roster: &mut MonsterRoster,
    map: &Map,
    rooms: &[Room],
    player: Position,
    rng: &mut GameRng,
) {
    let mut boss = Monster::from_template(&BOSS_TEMPLATE, Position::default());
    boss.hp *= 2;
    boss.points *= 2;

    let preferred = rooms
        .last()
        .map(Room::center)
        .filter(|&c| is_spawnable(roster, map, player, c));

    // Centre taken: spend the remaining attempts on random tiles of random rooms
    let pos = preferred.or_else(|| {
        (1..PLACEMENT_ATTEMPTS).find_map(|_| {
            let pos = match rng.choose(rooms).copied() {
                Some(room) => Position::new(
                    room.x + rng.rn2(room.width as u32) as i32,
                    room.y + rng.rn2(room.height as u32) as i32,
                ),
                None => {
                    let (x, y) = rng.random_coord(MAP_WIDTH, MAP_HEIGHT);
                    Position::new(x, y)
                }
            };
            is_spawnable(roster, map, player, pos).then_some(pos)
        })
    });

    match pos {
        Some(pos) => {
            boss.pos = pos;
            info!("{} awaits at ({}, {})", boss.name, pos.x, pos.y);
        }
        None => {
            debug!("no room for {}, leaving it inactive", boss.name);
            boss.active = false;
        }
    }
    roster.spawn(boss);
}

/// Up to `PLACEMENT_ATTEMPTS` random tiles
fn find_spawn_tile(
    roster: &MonsterRoster,
    map: &Map,
    player: Position,
    rng: &mut GameRng,
) -> Option<Position> {
    (0..PLACEMENT_ATTEMPTS).find_map(|_| {
        let (x, y) = rng.random_coord(MAP_WIDTH, MAP_HEIGHT);
        let pos = Position::new(x, y);
        is_spawnable(roster, map, player, pos).then_some(pos)
    })
}

/// Plain floor, not the player, not another monster
fn is_spawnable(roster: &MonsterRoster, map: &Map, player: Position, pos: Position) -> bool {
    map.is_floor(pos) && pos != player && !roster.is_occupied(pos)
}
