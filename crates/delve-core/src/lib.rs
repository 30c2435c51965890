//! delve-core: Core game logic for the delve dungeon crawler
//!
//! This crate contains all game logic with no I/O dependencies: dungeon
//! generation, monsters, the action resolvers and the turn loop. Front ends
//! drive it through [`GameLoop::tick`] and read [`GameState`] to draw.

pub mod action;
pub mod dungeon;
pub mod geometry;
pub mod monster;
pub mod player;

mod config;
mod consts;
mod gameloop;
mod rng;

pub use action::{ActionError, ActionResult, Input, Intent};
pub use config::{ConfigError, GameConfig, PlayerStart};
pub use consts::*;
pub use gameloop::{
    GameEvent, GameLoop, GameLoopResult, GameMode, GameState, MissileTrace, SpellState,
};
pub use geometry::{Direction, Position};
pub use player::Player;
pub use rng::GameRng;
