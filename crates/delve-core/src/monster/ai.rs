//! Monster AI
//!
//! Monsters only chase: each active monster within detection range takes
//! one greedy step per point of speed, along the axis with the larger
//! offset to the player, falling back to the other axis when blocked.
//! Attacks happen only as retaliation during the player's melee.

use log::trace;

use super::roster::{MonsterId, MonsterRoster};
use crate::dungeon::Map;
use crate::geometry::Position;
use crate::MONSTER_DETECTION_RANGE;

/// AI action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiAction {
    /// Player out of range, or the monster is dead
    None,
    /// Moved to new position
    Moved(Position),
    /// In range but both axes were blocked
    Blocked,
}

/// Run one monster turn for every active monster, in slot order
pub fn move_monsters(roster: &mut MonsterRoster, map: &Map, player: Position) {
    let ids: Vec<MonsterId> = roster.ids().collect();
    for id in ids {
        let speed = match roster.get(id) {
            Some(m) if m.active => m.speed,
            _ => continue,
        };
        for _ in 0..speed {
            process_monster_ai(id, roster, map, player);
        }
    }
}

/// Take a single step for one monster
pub fn process_monster_ai(
    id: MonsterId,
    roster: &mut MonsterRoster,
    map: &Map,
    player: Position,
) -> AiAction {
    let from = match roster.get(id) {
        Some(m) if m.active => m.pos,
        _ => return AiAction::None,
    };

    if from.distance(player) > MONSTER_DETECTION_RANGE {
        return AiAction::None;
    }

    let dx = player.x - from.x;
    let dy = player.y - from.y;
    // A zero offset still steps towards negative, same as the primary axis
    let step_x = Position::new(from.x + if dx > 0 { 1 } else { -1 }, from.y);
    let step_y = Position::new(from.x, from.y + if dy > 0 { 1 } else { -1 });

    let (primary, secondary) = if dx.abs() > dy.abs() {
        (step_x, step_y)
    } else {
        (step_y, step_x)
    };

    for target in [primary, secondary] {
        if can_enter(roster, map, player, target) {
            if let Some(m) = roster.get_mut(id) {
                m.pos = target;
                trace!("{} steps to ({}, {})", m.name, target.x, target.y);
            }
            return AiAction::Moved(target);
        }
    }

    AiAction::Blocked
}

fn can_enter(roster: &MonsterRoster, map: &Map, player: Position, pos: Position) -> bool {
    map.is_walkable(pos) && pos != player && !roster.is_occupied(pos)
}
