//! Main game loop
//!
//! [`GameState`] is the whole session: player, level, monsters, RNG and the
//! message channel. [`GameLoop::tick`] feeds it one input at a time and runs
//! the end-of-turn pipeline whenever the action used up the player's turn.

use std::collections::VecDeque;

use log::info;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::action::{self, ActionResult, Input, Intent};
use crate::config::{GameConfig, PlayerStart};
use crate::dungeon::{generate_dungeon, Map, VisibilityGrid};
use crate::geometry::Position;
use crate::monster::{move_monsters, populate_monsters, MonsterId, MonsterRoster};
use crate::player::Player;
use crate::rng::GameRng;
use crate::{FINAL_DUNGEON_LEVEL, MESSAGE_HISTORY_LEN, MESSAGE_LIFETIME, PASSIVE_REGEN_INTERVAL};

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player died, with the cause of death
    PlayerDied(String),
    /// Player quit
    PlayerQuit,
    /// Boss defeated on the final level
    PlayerWon,
}

/// Which screen the session is on; routes input and picks what to draw
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum GameMode {
    #[default]
    Playing,
    /// Help overlay, the simulation is paused
    Help,
    /// Level-up announcement; [`GameLoop::settle`] returns to play
    LevelUp,
    GameOver,
    Win,
}

impl GameMode {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, GameMode::GameOver | GameMode::Win)
    }
}

/// Two-phase spell input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpellState {
    #[default]
    Idle,
    /// Magic missile armed, next key picks the direction
    AwaitingDirection,
}

/// Something worth extra feedback from the front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Descended { level: u32 },
    LevelUp { level: u32 },
    Starving,
    MonsterSlain { name: String, points: i32 },
    PlayerDied { cause: String },
    Won { score: i32 },
}

/// Flight of the last magic missile, for animation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissileTrace {
    /// Open tiles the bolt crossed, in order
    pub path: Vec<Position>,
    /// Tile where it stopped: a wall, the map edge or a monster
    pub impact: Position,
    /// Monster struck, if any
    pub hit: Option<MonsterId>,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    pub map: Map,
    pub visibility: VisibilityGrid,
    pub monsters: MonsterRoster,
    pub rng: GameRng,

    /// Current floor, 1 to `FINAL_DUNGEON_LEVEL`
    pub dungeon_level: u32,
    pub mode: GameMode,
    pub spell: SpellState,

    /// Consecutive rests towards the next rest bonus
    pub rest_counter: u32,
    /// Turns towards the next passive regeneration
    pub regen_counter: u32,
    /// Turns taken this session
    pub turns: u64,

    message: Option<String>,
    message_timer: u32,
    message_history: VecDeque<String>,
    events: Vec<GameEvent>,
    last_missile: Option<MissileTrace>,
}

impl GameState {
    /// Start a new session on level 1
    pub fn new(rng: GameRng, start: &PlayerStart) -> Self {
        let mut state = Self {
            player: Player::new(start),
            map: Map::new(),
            visibility: VisibilityGrid::new(),
            monsters: MonsterRoster::new(),
            rng,
            dungeon_level: 1,
            mode: GameMode::Playing,
            spell: SpellState::Idle,
            rest_counter: 0,
            regen_counter: 0,
            turns: 0,
            message: None,
            message_timer: 0,
            message_history: VecDeque::with_capacity(MESSAGE_HISTORY_LEN),
            events: Vec::new(),
            last_missile: None,
        };
        info!("new game, seed {}", state.rng.seed());
        state.generate_level();
        state.update_visibility();
        state
    }

    /// Start a session from a config, seeding from entropy when it has no seed
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::new(rng, &config.player)
    }

    /// Replace map, monsters and explored tiles with a fresh level
    pub fn generate_level(&mut self) {
        let layout = generate_dungeon(
            &mut self.map,
            &mut self.visibility,
            self.dungeon_level,
            &mut self.rng,
        );
        self.player.pos = layout.player_start;
        populate_monsters(
            &mut self.monsters,
            &self.map,
            &layout.rooms,
            self.player.pos,
            self.dungeon_level,
            &mut self.rng,
        );
        info!(
            "dungeon level {}: {} rooms, {} monsters",
            self.dungeon_level,
            layout.rooms.len(),
            self.monsters.active_count()
        );
    }

    /// Mark everything within sight of the player as explored
    pub fn update_visibility(&mut self) {
        self.visibility
            .reveal_around(self.player.pos, self.player.visibility_radius);
    }

    /// Show a message; it stays up for `MESSAGE_LIFETIME` turns
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        if self.message_history.len() == MESSAGE_HISTORY_LEN {
            self.message_history.pop_front();
        }
        self.message_history.push_back(msg.clone());
        self.message = Some(msg);
        self.message_timer = MESSAGE_LIFETIME;
    }

    /// The message currently on screen
    pub fn current_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Recent messages, oldest first
    pub fn message_history(&self) -> impl Iterator<Item = &str> {
        self.message_history.iter().map(String::as_str)
    }

    /// Count down the message timer, clearing the message when it runs out
    fn decay_message(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised by the last tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub(crate) fn set_missile_trace(&mut self, trace: MissileTrace) {
        self.last_missile = Some(trace);
    }

    /// Bolt fired during the last tick, if any
    pub fn last_missile(&self) -> Option<&MissileTrace> {
        self.last_missile.as_ref()
    }

    /// Final floor reached and the boss is gone
    pub fn boss_defeated(&self) -> bool {
        self.dungeon_level >= FINAL_DUNGEON_LEVEL && !self.monsters.boss_active()
    }

    /// Whether `pos` is currently lit for the player
    pub fn in_sight(&self, pos: Position) -> bool {
        crate::dungeon::is_in_sight(self.player.pos, self.player.visibility_radius, pos)
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Process one input
    pub fn tick(&mut self, input: Input) -> GameLoopResult {
        self.state.events.clear();
        self.state.last_missile = None;

        match self.state.mode {
            GameMode::GameOver => {
                let cause = self.state.player.cause_of_death.clone().unwrap_or_default();
                return GameLoopResult::PlayerDied(cause);
            }
            GameMode::Win => return GameLoopResult::PlayerWon,
            GameMode::Help => {
                if input.intent == Intent::Escape {
                    self.state.mode = GameMode::Playing;
                }
                return GameLoopResult::Continue;
            }
            GameMode::LevelUp => return GameLoopResult::Continue,
            GameMode::Playing => {}
        }

        if input.intent == Intent::Escape {
            info!("player quit on dungeon level {}", self.state.dungeon_level);
            return GameLoopResult::PlayerQuit;
        }

        let result = self.execute(input);

        if let ActionResult::Failed(err) = &result {
            if err.is_reported() {
                self.state.message(err.to_string());
            }
        }

        if result.consumes_turn() {
            self.end_turn();
        }

        self.check_terminal()
    }

    /// Leave the level-up announcement
    pub fn settle(&mut self) {
        if self.state.mode == GameMode::LevelUp {
            self.state.mode = GameMode::Playing;
        }
    }

    /// Route an input to its resolver
    fn execute(&mut self, input: Input) -> ActionResult {
        let state = &mut self.state;

        if state.spell == SpellState::AwaitingDirection {
            state.spell = SpellState::Idle;
            return match input.intent {
                Intent::Move(dir) | Intent::FireMagicMissile(dir) => {
                    action::spell::cast_magic_missile(state, dir)
                }
                _ => {
                    state.message("Magic missile cancelled.");
                    ActionResult::NoTime
                }
            };
        }

        match input.intent {
            Intent::Move(dir) => action::movement::move_player(state, dir, input.repeat),
            Intent::Rest => {
                if input.repeat {
                    ActionResult::NoTime
                } else {
                    action::rest::rest(state)
                }
            }
            Intent::CastHeal => action::spell::cast_heal(state),
            Intent::ArmMagicMissile => action::spell::arm_magic_missile(state),
            Intent::FireMagicMissile(dir) => action::spell::cast_magic_missile(state, dir),
            Intent::CastPhaseDoor => action::spell::cast_phase_door(state),
            Intent::UseHealthPotion => action::item::use_health_potion(state),
            Intent::EatFood => action::item::eat_food(state),
            Intent::OpenHelp => {
                state.mode = GameMode::Help;
                ActionResult::NoTime
            }
            Intent::Escape | Intent::Unbound => ActionResult::NoTime,
        }
    }

    /// Monsters act, then hunger, regeneration, level-up and sight
    fn end_turn(&mut self) {
        let state = &mut self.state;

        move_monsters(&mut state.monsters, &state.map, state.player.pos);

        state.decay_message();

        state.player.hunger += 1;
        if state.player.is_famished() {
            state.player.hp -= 1;
            if !state.player.is_starving {
                state.player.is_starving = true;
                state.message("You are starving!");
                state.emit(GameEvent::Starving);
            }
        } else {
            state.player.is_starving = false;
        }

        state.regen_counter += 1;
        if state.regen_counter >= PASSIVE_REGEN_INTERVAL {
            state.player.heal(1);
            state.player.restore_mana(1);
            state.regen_counter = 0;
        }

        if state.player.check_level_up() > 0 {
            state.mode = GameMode::LevelUp;
            let level = state.player.level;
            state.emit(GameEvent::LevelUp { level });
        }

        state.update_visibility();
        state.turns += 1;
    }

    /// Death first, then victory
    fn check_terminal(&mut self) -> GameLoopResult {
        let state = &mut self.state;

        if state.player.is_dead() {
            // Anything that did not name a killer was hunger
            state.player.record_death("starvation");
            let cause = state.player.cause_of_death.clone().unwrap_or_default();
            state.mode = GameMode::GameOver;
            info!(
                "player died on dungeon level {} ({}), score {}",
                state.dungeon_level, cause, state.player.score
            );
            state.emit(GameEvent::PlayerDied {
                cause: cause.clone(),
            });
            return GameLoopResult::PlayerDied(cause);
        }
        // Recovered this turn (regeneration or a level-up heal)
        state.player.cause_of_death = None;

        if state.boss_defeated() {
            state.mode = GameMode::Win;
            let score = state.player.score;
            info!("boss defeated, final score {}", score);
            state.emit(GameEvent::Won { score });
            return GameLoopResult::PlayerWon;
        }

        GameLoopResult::Continue
    }
}
