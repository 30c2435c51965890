//! Core game constants
//!
//! Map geometry, spawn limits and the turn-pipeline thresholds.

/// Map dimensions
pub const MAP_WIDTH: usize = 160;
pub const MAP_HEIGHT: usize = 50;

/// Room placement attempts per level
pub const MAX_ROOMS: usize = 20;

/// Room size ranges (inclusive)
pub const ROOM_MIN_WIDTH: u32 = 5;
pub const ROOM_MAX_WIDTH: u32 = 14;
pub const ROOM_MIN_HEIGHT: u32 = 4;
pub const ROOM_MAX_HEIGHT: u32 = 11;

/// Monster roster size
pub const MAX_MONSTERS: usize = 20;

/// Manhattan distance at which monsters start chasing the player
pub const MONSTER_DETECTION_RANGE: i32 = 8;

/// Bounded retries for monster placement
pub const PLACEMENT_ATTEMPTS: u32 = 100;

/// Bounded retries for the phase door destination search
pub const PHASE_DOOR_ATTEMPTS: u32 = 1000;

/// The boss floor; no stairs are placed here
pub const FINAL_DUNGEON_LEVEL: u32 = 5;

/// Hunger at which the player starts losing hp every turn
pub const HUNGER_STARVING: i32 = 200;

/// Turns between passive hp/mana regeneration ticks
pub const PASSIVE_REGEN_INTERVAL: u32 = 5;

/// Initial value of the (unused) turns-to-hunger counter
pub const HUNGER_TURN_THRESHOLD: i32 = 20;

/// Consecutive rests needed to recover 1 hp and 1 mana
pub const REST_TURNS_REQUIRED: u32 = 5;

/// Hunger added by each rest
pub const REST_HUNGER_COST: i32 = 5;

/// A message stays for the turn it was shown plus one more
pub const MESSAGE_LIFETIME: u32 = 2;

/// Number of past messages kept for the adapter
pub const MESSAGE_HISTORY_LEN: usize = 50;

/// Spell costs
pub const HEAL_MANA_COST: i32 = 3;
pub const MAGIC_MISSILE_MANA_COST: i32 = 2;
pub const PHASE_DOOR_MANA_COST: i32 = 5;

/// Map symbols
pub const S_WALL: char = '#';
pub const S_FLOOR: char = '.';
pub const S_STAIRS_DOWN: char = '>';
pub const S_POTION: char = '!';
pub const S_FOOD: char = 'F';
pub const S_PLAYER: char = '@';
