//! Monster instances and the per-level roster
//!
//! The roster is an arena of slots addressed by [`MonsterId`]. A slot is
//! filled once during level population and only ever deactivated
//! afterwards, so ids stay stable for the whole level.

use serde::{Deserialize, Serialize};

use super::template::{MonsterTemplate, BOSS_NAME};
use crate::geometry::Position;
use crate::MAX_MONSTERS;

/// Stable handle to a roster slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub usize);

/// A monster instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub pos: Position,
    pub symbol: char,
    pub name: String,
    pub hp: i32,
    pub speed: u32,
    pub points: i32,
    pub ranged_attack: bool,
    /// Alive and taking part in the level
    pub active: bool,
}

impl Monster {
    /// Instantiate a template as-is; the caller applies any scaling
    pub fn from_template(template: &MonsterTemplate, pos: Position) -> Self {
        Self {
            id: MonsterId(0),
            pos,
            symbol: template.symbol,
            name: template.name.to_string(),
            hp: template.hp,
            speed: template.speed,
            points: template.points,
            ranged_attack: template.ranged_attack,
            active: true,
        }
    }

    pub fn is_boss(&self) -> bool {
        self.name == BOSS_NAME
    }

    /// Subtract hp, returns true if this killed the monster
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp -= amount;
        self.hp <= 0
    }
}

/// Fixed-capacity arena of monsters for the current level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterRoster {
    slots: Vec<Monster>,
}

impl MonsterRoster {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(MAX_MONSTERS),
        }
    }

    /// Drop every slot (new level)
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Fill the next free slot, returning its id; `None` once all slots are taken
    pub fn spawn(&mut self, mut monster: Monster) -> Option<MonsterId> {
        if self.slots.len() >= MAX_MONSTERS {
            return None;
        }
        let id = MonsterId(self.slots.len());
        monster.id = id;
        self.slots.push(monster);
        Some(id)
    }

    /// Mark a monster dead; its slot is kept
    pub fn despawn(&mut self, id: MonsterId) {
        if let Some(m) = self.slots.get_mut(id.0) {
            m.active = false;
        }
    }

    pub fn get(&self, id: MonsterId) -> Option<&Monster> {
        self.slots.get(id.0)
    }

    pub fn get_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.slots.get_mut(id.0)
    }

    /// Number of slots in use, active or not
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Every slot in id order
    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.slots.iter()
    }

    /// Active monsters in id order
    pub fn active(&self) -> impl Iterator<Item = &Monster> {
        self.slots.iter().filter(|m| m.active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Ids of all slots, in the order monsters take their turns
    pub fn ids(&self) -> impl Iterator<Item = MonsterId> + use<> {
        (0..self.slots.len()).map(MonsterId)
    }

    /// Active monster standing on `pos`
    pub fn monster_at(&self, pos: Position) -> Option<MonsterId> {
        self.active().find(|m| m.pos == pos).map(|m| m.id)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.monster_at(pos).is_some()
    }

    /// Whether the named boss is still alive
    pub fn boss_active(&self) -> bool {
        self.active().any(Monster::is_boss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::template::{BOSS_TEMPLATE, MONSTER_TEMPLATES};

    fn goblin_at(x: i32, y: i32) -> Monster {
        Monster::from_template(&MONSTER_TEMPLATES[0], Position::new(x, y))
    }

    #[test]
    fn test_spawn_assigns_sequential_ids() {
        let mut roster = MonsterRoster::new();
        let a = roster.spawn(goblin_at(1, 1)).unwrap();
        let b = roster.spawn(goblin_at(2, 1)).unwrap();
        assert_eq!(a, MonsterId(0));
        assert_eq!(b, MonsterId(1));
        assert_eq!(roster.get(b).unwrap().id, b);
    }

    #[test]
    fn test_roster_capacity() {
        let mut roster = MonsterRoster::new();
        for i in 0..MAX_MONSTERS {
            assert!(roster.spawn(goblin_at(i as i32, 0)).is_some());
        }
        assert!(roster.spawn(goblin_at(0, 1)).is_none());
        assert_eq!(roster.len(), MAX_MONSTERS);
    }

    #[test]
    fn test_despawn_keeps_slot() {
        let mut roster = MonsterRoster::new();
        let id = roster.spawn(goblin_at(4, 4)).unwrap();
        assert_eq!(roster.monster_at(Position::new(4, 4)), Some(id));

        roster.despawn(id);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.active_count(), 0);
        assert!(!roster.is_occupied(Position::new(4, 4)));
        assert!(roster.get(id).is_some());
    }

    #[test]
    fn test_boss_tracking() {
        let mut roster = MonsterRoster::new();
        roster.spawn(goblin_at(1, 1));
        assert!(!roster.boss_active());
        let boss = roster
            .spawn(Monster::from_template(&BOSS_TEMPLATE, Position::new(9, 9)))
            .unwrap();
        assert!(roster.boss_active());
        roster.despawn(boss);
        assert!(!roster.boss_active());
    }

    #[test]
    fn test_take_damage() {
        let mut m = goblin_at(0, 0);
        assert!(!m.take_damage(4));
        assert_eq!(m.hp, 1);
        assert!(m.take_damage(1));
    }
}
