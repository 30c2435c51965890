//! Consumables: health potions and food

use super::{ActionError, ActionResult};
use crate::gameloop::GameState;

/// Potion heal amount: 5 to 12
pub fn potion_heal_amount(state: &mut GameState) -> i32 {
    state.rng.range(5, 12)
}

/// Drink a health potion
pub fn use_health_potion(state: &mut GameState) -> ActionResult {
    if state.player.health_potions == 0 {
        return ActionResult::Failed(ActionError::NoPotions);
    }
    state.player.health_potions -= 1;
    let amount = potion_heal_amount(state);
    state.player.heal(amount);
    state.message(format!("You use a health potion and recover {} HP!", amount));
    ActionResult::Success
}

/// Eat one food ration, clearing hunger
pub fn eat_food(state: &mut GameState) -> ActionResult {
    if state.player.food == 0 {
        return ActionResult::Failed(ActionError::NoFood);
    }
    state.player.food -= 1;
    state.player.hunger = 0;
    state.message("You eat the food and are no longer hungry!");
    ActionResult::Success
}
