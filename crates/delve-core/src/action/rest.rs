//! Resting
//!
//! Five consecutive rests recover 1 hp and 1 mana. Every rest makes the
//! player hungrier, and nobody can rest with a monster next to them.

use super::{ActionError, ActionResult};
use crate::gameloop::GameState;
use crate::{REST_HUNGER_COST, REST_TURNS_REQUIRED};

/// Rest for one turn
pub fn rest(state: &mut GameState) -> ActionResult {
    let adjacent = state
        .player
        .pos
        .neighbors()
        .into_iter()
        .any(|p| state.monsters.is_occupied(p));
    if adjacent {
        return ActionResult::Failed(ActionError::MonsterAdjacent);
    }

    state.rest_counter += 1;
    if state.rest_counter >= REST_TURNS_REQUIRED {
        state.player.heal(1);
        state.player.restore_mana(1);
        state.rest_counter = 0;
        state.message("You have rested and recovered 1 HP and 1 Mana!");
    } else {
        let msg = format!(
            "Resting... (Turn {}/{})",
            state.rest_counter, REST_TURNS_REQUIRED
        );
        state.message(msg);
    }
    state.player.hunger += REST_HUNGER_COST;

    ActionResult::Success
}
