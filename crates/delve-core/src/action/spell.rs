//! Spellcasting
//!
//! Three spells: heal, magic missile and phase door. Mana is taken before
//! the spell resolves, so a phase door that finds nowhere to land is still
//! paid for.

use log::debug;

use super::combat::slay;
use super::{ActionError, ActionResult};
use crate::gameloop::{GameState, MissileTrace, SpellState};
use crate::geometry::{Direction, Position};
use crate::monster::MonsterId;
use crate::{
    HEAL_MANA_COST, MAGIC_MISSILE_MANA_COST, MAP_HEIGHT, MAP_WIDTH, PHASE_DOOR_ATTEMPTS,
    PHASE_DOOR_MANA_COST,
};

/// Heal amount: 3 to 7, plus intelligence
pub fn heal_amount(state: &mut GameState) -> i32 {
    state.rng.range(3, 7) + state.player.intelligence
}

/// Magic missile damage: 1 to 5, plus intelligence
pub fn missile_damage(state: &mut GameState) -> i32 {
    state.rng.range(1, 5) + state.player.intelligence
}

/// Cast the healing spell
pub fn cast_heal(state: &mut GameState) -> ActionResult {
    if !state.player.spend_mana(HEAL_MANA_COST) {
        return ActionResult::Failed(ActionError::InsufficientMana {
            spell: "the healing spell",
            cost: HEAL_MANA_COST,
        });
    }
    let amount = heal_amount(state);
    state.player.heal(amount);
    state.message(format!("You cast a healing spell and recover {} HP!", amount));
    ActionResult::Success
}

/// Ready a magic missile; the next key decides where it goes
pub fn arm_magic_missile(state: &mut GameState) -> ActionResult {
    state.spell = SpellState::AwaitingDirection;
    state.message("Choose a direction for magic missile!");
    ActionResult::NoTime
}

/// Fire a magic missile in `dir`
///
/// The bolt flies until it leaves the open floor or reaches the first
/// monster. The tiles it crossed are kept as the session's missile trace.
pub fn cast_magic_missile(state: &mut GameState, dir: Direction) -> ActionResult {
    if !state.player.spend_mana(MAGIC_MISSILE_MANA_COST) {
        return ActionResult::Failed(ActionError::InsufficientMana {
            spell: "magic missile",
            cost: MAGIC_MISSILE_MANA_COST,
        });
    }

    let mut path = Vec::new();
    let mut pos = state.player.pos;
    loop {
        pos = pos.step(dir);

        if !state.map.is_walkable(pos) {
            state.message("The magic missile hits a wall!");
            state.set_missile_trace(MissileTrace {
                path,
                impact: pos,
                hit: None,
            });
            return ActionResult::Success;
        }

        if let Some(id) = state.monsters.monster_at(pos) {
            strike_with_missile(state, id);
            state.set_missile_trace(MissileTrace {
                path,
                impact: pos,
                hit: Some(id),
            });
            return ActionResult::Success;
        }

        path.push(pos);
    }
}

fn strike_with_missile(state: &mut GameState, id: MonsterId) {
    let damage = missile_damage(state);
    let Some(monster) = state.monsters.get_mut(id) else {
        return;
    };
    let killed = monster.take_damage(damage);
    let name = monster.name.clone();
    let points = monster.points;
    if killed {
        state.message(format!("You defeated the {}!", name));
        slay(state, id, &name, points);
    } else {
        state.message(format!(
            "You cast magic missile at the {} for {} damage!",
            name, damage
        ));
    }
}

/// Cast phase door: jump to a random open tile
pub fn cast_phase_door(state: &mut GameState) -> ActionResult {
    if !state.player.spend_mana(PHASE_DOOR_MANA_COST) {
        return ActionResult::Failed(ActionError::InsufficientMana {
            spell: "Phase Door",
            cost: PHASE_DOOR_MANA_COST,
        });
    }

    match phase_door_destination(state) {
        Ok(dest) => {
            state.player.pos = dest;
            state.message("You cast Phase Door and teleport to a new location!");
            ActionResult::Success
        }
        Err(err) => {
            debug!("phase door gave up: {:?}", err);
            ActionResult::Failed(err)
        }
    }
}

/// Random walkable tile without a monster, within `PHASE_DOOR_ATTEMPTS` tries
pub fn phase_door_destination(state: &mut GameState) -> Result<Position, ActionError> {
    let mut attempts = 0;
    while attempts < PHASE_DOOR_ATTEMPTS {
        attempts += 1;
        let (x, y) = state.rng.random_coord(MAP_WIDTH, MAP_HEIGHT);
        let pos = Position::new(x, y);
        if state.map.is_walkable(pos) && !state.monsters.is_occupied(pos) {
            return Ok(pos);
        }
    }
    Err(ActionError::NoSafeLocation { attempts })
}
