//! Property tests for level generation and sight
//!
//! - Rooms never overlap and are all connected to the first room
//! - Stairs: exactly one, at the last room's centre, above the final floor
//! - The final floor holds the boss and nothing else
//! - Explored tiles only ever grow within a level

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;

use delve_core::dungeon::{generate_dungeon, Map, Tile, VisibilityGrid};
use delve_core::monster::BOSS_NAME;
use delve_core::{
    Direction, GameLoop, GameLoopResult, GameMode, GameRng, GameState, Input, Intent, PlayerStart,
    Position, FINAL_DUNGEON_LEVEL,
};

/// Flood fill over walkable tiles
fn reachable_from(map: &Map, start: Position) -> HashSet<Position> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        for next in pos.neighbors() {
            if map.is_walkable(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        4 => prop_oneof![
            Just(Direction::North),
            Just(Direction::South),
            Just(Direction::East),
            Just(Direction::West),
        ]
        .prop_map(Intent::Move),
        1 => Just(Intent::Rest),
        1 => Just(Intent::CastHeal),
        1 => Just(Intent::CastPhaseDoor),
        1 => Just(Intent::UseHealthPotion),
        1 => Just(Intent::EatFood),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rooms_disjoint_and_connected(seed in any::<u64>(), level in 1u32..=FINAL_DUNGEON_LEVEL) {
        let mut map = Map::new();
        let mut vis = VisibilityGrid::new();
        let mut rng = GameRng::new(seed);
        let layout = generate_dungeon(&mut map, &mut vis, level, &mut rng);

        for (i, a) in layout.rooms.iter().enumerate() {
            for b in &layout.rooms[i + 1..] {
                prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }

        let reachable = reachable_from(&map, layout.player_start);
        for room in &layout.rooms {
            for pos in room.tiles() {
                prop_assert!(reachable.contains(&pos), "{:?} unreachable in {:?}", pos, room);
            }
        }
        prop_assert_eq!(vis.explored_count(), 0);
    }

    #[test]
    fn prop_stairs_only_above_final_floor(seed in any::<u64>(), level in 1u32..=FINAL_DUNGEON_LEVEL) {
        let mut map = Map::new();
        let mut vis = VisibilityGrid::new();
        let mut rng = GameRng::new(seed);
        let layout = generate_dungeon(&mut map, &mut vis, level, &mut rng);

        let stairs: Vec<_> = map.positions_of(Tile::StairsDown).collect();
        if level < FINAL_DUNGEON_LEVEL && layout.rooms.len() >= 2 {
            let last = layout.rooms[layout.rooms.len() - 1].center();
            prop_assert_eq!(stairs, vec![last]);
        } else {
            prop_assert!(stairs.is_empty());
        }
        prop_assert!(map.count(Tile::Potion) <= 1);
        prop_assert!(map.count(Tile::Food) <= 1);
    }

    #[test]
    fn prop_final_floor_holds_only_the_boss(seed in any::<u64>()) {
        let mut state = GameState::new(GameRng::new(seed), &PlayerStart::default());
        state.dungeon_level = FINAL_DUNGEON_LEVEL;
        state.generate_level();

        let active: Vec<_> = state.monsters.active().collect();
        prop_assert_eq!(active.len(), 1);
        prop_assert_eq!(active[0].name.as_str(), BOSS_NAME);
        prop_assert_ne!(active[0].pos, state.player.pos);
    }

    #[test]
    fn prop_explored_is_monotonic(seed in any::<u64>(), intents in prop::collection::vec(intent_strategy(), 1..60)) {
        let mut gl = GameLoop::new(GameState::new(GameRng::new(seed), &PlayerStart::default()));
        let mut explored = gl.state().visibility.explored_count();
        let mut level = gl.state().dungeon_level;

        for intent in intents {
            let result = gl.tick(Input::new(intent));
            gl.settle();
            let state = gl.state();
            if state.dungeon_level != level {
                level = state.dungeon_level;
            } else {
                prop_assert!(state.visibility.explored_count() >= explored);
            }
            explored = state.visibility.explored_count();
            prop_assert!(state.visibility.is_explored(state.player.pos));
            if result != GameLoopResult::Continue {
                prop_assert!(matches!(state.mode, GameMode::GameOver | GameMode::Win));
                break;
            }
        }
    }

    #[test]
    fn prop_player_stats_stay_in_range(seed in any::<u64>(), intents in prop::collection::vec(intent_strategy(), 1..80)) {
        let mut gl = GameLoop::new(GameState::new(GameRng::new(seed), &PlayerStart::default()));
        for intent in intents {
            if gl.tick(Input::new(intent)) != GameLoopResult::Continue {
                break;
            }
            gl.settle();
            let p = &gl.state().player;
            prop_assert!(p.hp > 0 && p.hp <= p.max_hp);
            prop_assert!(p.mana >= 0 && p.mana <= p.max_mana);
            prop_assert!(p.xp < p.xp_to_next_level);
        }
    }
}
