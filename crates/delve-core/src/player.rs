//! The player character

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::PlayerStart;
use crate::geometry::Position;
use crate::HUNGER_STARVING;

/// Player state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,

    pub hp: i32,
    pub max_hp: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub intelligence: i32,

    pub score: i32,

    /// Inventory counts
    pub health_potions: u32,
    pub food: u32,

    /// Experience level, starting at 1
    pub level: u32,
    pub xp: i32,
    pub xp_to_next_level: i32,

    /// Turns since the last meal; at `HUNGER_STARVING` hp drains every turn
    pub hunger: i32,
    /// Carried for completeness, nothing reads it
    pub turns_to_hunger: i32,
    /// Manhattan sight radius
    pub visibility_radius: i32,

    /// Set once the starvation warning has been given
    pub is_starving: bool,
    pub cause_of_death: Option<String>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(&PlayerStart::default())
    }
}

impl Player {
    pub fn new(start: &PlayerStart) -> Self {
        Self {
            pos: Position::default(),
            hp: start.hp,
            max_hp: start.hp,
            mana: start.mana,
            max_mana: start.mana,
            intelligence: start.intelligence,
            score: 0,
            health_potions: start.potions,
            food: start.food,
            level: 1,
            xp: 0,
            xp_to_next_level: start.xp_to_next_level,
            hunger: 0,
            turns_to_hunger: crate::HUNGER_TURN_THRESHOLD,
            visibility_radius: start.visibility_radius,
            is_starving: false,
            cause_of_death: None,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    pub fn is_famished(&self) -> bool {
        self.hunger >= HUNGER_STARVING
    }

    /// Add hp up to the maximum
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// Add mana up to the maximum
    pub fn restore_mana(&mut self, amount: i32) {
        self.mana = (self.mana + amount).min(self.max_mana);
    }

    /// Deduct mana if there is enough; returns false and leaves mana alone otherwise
    pub fn spend_mana(&mut self, cost: i32) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana -= cost;
        true
    }

    /// Score and xp for a kill
    pub fn gain_reward(&mut self, points: i32) {
        self.score += points;
        self.xp += points;
    }

    /// Record what killed the player, keeping the first cause
    pub fn record_death(&mut self, cause: &str) {
        if self.cause_of_death.is_none() {
            self.cause_of_death = Some(cause.to_string());
        }
    }

    /// Apply every level-up the current xp pays for; returns how many
    ///
    /// Each crossing subtracts the threshold once and then doubles it, so a
    /// large xp gain can cross several thresholds in one check.
    pub fn check_level_up(&mut self) -> u32 {
        let mut gained = 0;
        while self.xp_to_next_level > 0 && self.xp >= self.xp_to_next_level {
            self.level += 1;
            self.xp -= self.xp_to_next_level;
            self.xp_to_next_level *= 2;
            self.max_hp += 5;
            self.hp = self.max_hp;
            self.max_mana += 2;
            self.mana = self.max_mana;
            self.intelligence += 1;
            gained += 1;
            info!("player reached level {}", self.level);
        }
        gained
    }
}
