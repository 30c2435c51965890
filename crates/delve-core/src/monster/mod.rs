//! Monster system
//!
//! Contains monster templates, the per-level roster, level population and
//! the chase AI.

pub mod ai;
mod director;
mod roster;
mod template;

pub use ai::{move_monsters, process_monster_ai, AiAction};
pub use director::populate_monsters;
pub use roster::{Monster, MonsterId, MonsterRoster};
pub use template::{template_by_name, MonsterTemplate, BOSS_NAME, BOSS_TEMPLATE, MONSTER_TEMPLATES};
