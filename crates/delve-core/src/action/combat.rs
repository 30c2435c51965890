//! Melee combat
//!
//! The player strikes first. A surviving monster hits back once; monsters
//! never start a fight on their own.

use log::{debug, info};

use crate::gameloop::{GameEvent, GameState};
use crate::monster::MonsterId;

/// Player melee damage: 1 to 2*intelligence
pub fn player_melee_damage(state: &mut GameState) -> i32 {
    let max = (2 * state.player.intelligence).max(1) as u32;
    state.rng.rnd(max) as i32
}

/// Monster retaliation damage: 1 to 5+dungeon level
pub fn monster_damage(state: &mut GameState) -> i32 {
    state.rng.rnd(5 + state.dungeon_level) as i32
}

/// Resolve the player attacking monster `id`
pub fn fight_monster(state: &mut GameState, id: MonsterId) {
    let damage = player_melee_damage(state);
    let Some(monster) = state.monsters.get_mut(id) else {
        return;
    };
    let killed = monster.take_damage(damage);
    let name = monster.name.clone();
    let points = monster.points;
    state.message(format!("You hit the {} for {} damage!", name, damage));

    if killed {
        let found_food = state.rng.one_in(2);
        if found_food {
            state.player.food += 1;
            state.message(format!("You defeated the {} and found some food!", name));
        } else {
            state.message(format!("You defeated the {}!", name));
        }
        slay(state, id, &name, points);
        return;
    }

    let damage = monster_damage(state);
    state.player.hp -= damage;
    if state.player.is_dead() {
        state.player.record_death(&name);
    }
    debug!("{} hits back for {}", name, damage);
    state.message(format!(
        "The {} hits you for {} damage! Your HP is now {}/{}.",
        name, damage, state.player.hp, state.player.max_hp
    ));
}

/// Award a kill and take the monster off the level
pub(crate) fn slay(state: &mut GameState, id: MonsterId, name: &str, points: i32) {
    state.player.gain_reward(points);
    state.monsters.despawn(id);
    info!("{} slain for {} points", name, points);
    state.emit(GameEvent::MonsterSlain {
        name: name.to_string(),
        points,
    });
}
