//! Monster templates
//!
//! Static stat blocks that level population copies from. Instances scale
//! hp and points from these by dungeon level.

/// Base stats for one kind of monster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterTemplate {
    /// Map symbol
    pub symbol: char,
    /// Display name, also the identity the win check looks for
    pub name: &'static str,
    /// Base hit points
    pub hp: i32,
    /// Steps taken per monster turn
    pub speed: u32,
    /// Score and xp awarded on death
    pub points: i32,
    /// Declared ranged attacker; no behaviour reads this yet
    pub ranged_attack: bool,
}

impl MonsterTemplate {
    pub const fn new(
        symbol: char,
        name: &'static str,
        hp: i32,
        speed: u32,
        points: i32,
        ranged_attack: bool,
    ) -> Self {
        Self {
            symbol,
            name,
            hp,
            speed,
            points,
            ranged_attack,
        }
    }
}

/// Ordinary monsters, chosen uniformly on levels 1-4
pub static MONSTER_TEMPLATES: [MonsterTemplate; 6] = [
    MonsterTemplate::new('g', "Goblin", 5, 2, 10, false),
    MonsterTemplate::new('O', "Ogre", 15, 1, 50, false),
    MonsterTemplate::new('o', "Orc", 10, 1, 20, false),
    MonsterTemplate::new('s', "Snake", 8, 3, 15, false),
    MonsterTemplate::new('D', "Dragon", 25, 1, 100, false),
    MonsterTemplate::new('E', "Poisonous Eye", 12, 2, 40, true),
];

/// Name of the final-level boss
pub const BOSS_NAME: &str = "Lich Lord";

/// The final-level boss; hp and points are doubled when it spawns
pub static BOSS_TEMPLATE: MonsterTemplate = MonsterTemplate::new('L', BOSS_NAME, 100, 1, 500, true);

/// Look up an ordinary template by display name
pub fn template_by_name(name: &str) -> Option<&'static MonsterTemplate> {
    MONSTER_TEMPLATES.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_lookup() {
        let goblin = template_by_name("Goblin").unwrap();
        assert_eq!(goblin.symbol, 'g');
        assert_eq!(goblin.hp, 5);
        assert_eq!(goblin.speed, 2);
        assert!(template_by_name(BOSS_NAME).is_none());
    }

    #[test]
    fn test_symbols_unique() {
        for (i, a) in MONSTER_TEMPLATES.iter().enumerate() {
            for b in &MONSTER_TEMPLATES[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
            assert_ne!(a.symbol, BOSS_TEMPLATE.symbol);
        }
    }

    #[test]
    fn test_only_eye_and_boss_are_ranged() {
        let ranged: Vec<_> = MONSTER_TEMPLATES
            .iter()
            .filter(|t| t.ranged_attack)
            .map(|t| t.name)
            .collect();
        assert_eq!(ranged, vec!["Poisonous Eye"]);
        assert!(BOSS_TEMPLATE.ranged_attack);
    }
}
