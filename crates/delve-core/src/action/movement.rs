//! Player movement
//!
//! Stepping onto stairs descends, onto an item picks it up, onto a monster
//! attacks it instead of moving.

use log::info;

use super::{combat, ActionError, ActionResult};
use crate::dungeon::Tile;
use crate::gameloop::{GameEvent, GameState};
use crate::geometry::Direction;

/// Try to step one tile in `dir`
///
/// A starving player only moves on fresh key-presses; held-key repeats are
/// dropped without using a turn.
pub fn move_player(state: &mut GameState, dir: Direction, repeat: bool) -> ActionResult {
    if state.player.is_starving && repeat {
        return ActionResult::NoTime;
    }

    let target = state.player.pos.step(dir);
    let Some(tile) = state.map.tile(target) else {
        return ActionResult::Failed(ActionError::Blocked);
    };
    if !tile.is_walkable() {
        return ActionResult::Failed(ActionError::Blocked);
    }

    if tile == Tile::StairsDown {
        descend(state);
        return ActionResult::Success;
    }

    match tile {
        Tile::Potion => {
            state.player.health_potions += 1;
            state.map.set(target, Tile::Floor);
            state.message("You found a health potion!");
        }
        Tile::Food => {
            state.player.food += 1;
            state.map.set(target, Tile::Floor);
            state.message("You found some food!");
        }
        _ => {}
    }

    match state.monsters.monster_at(target) {
        Some(id) => combat::fight_monster(state, id),
        None => state.player.pos = target,
    }

    ActionResult::Success
}

/// Go down the stairs to a freshly generated level
pub fn descend(state: &mut GameState) {
    state.dungeon_level += 1;
    info!("descending to dungeon level {}", state.dungeon_level);
    state.generate_level();
    state.message("You descend to a new level!");
    let level = state.dungeon_level;
    state.emit(GameEvent::Descended { level });
}
