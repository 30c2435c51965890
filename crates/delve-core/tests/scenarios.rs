//! End-to-end turn scenarios driven through `GameLoop::tick`

use delve_core::action::combat::{monster_damage, player_melee_damage};
use delve_core::action::item::potion_heal_amount;
use delve_core::action::spell::{heal_amount, missile_damage};
use delve_core::dungeon::{Room, Tile};
use delve_core::monster::{template_by_name, Monster, MonsterId, BOSS_TEMPLATE};
use delve_core::{
    Direction, GameEvent, GameLoop, GameLoopResult, GameMode, GameRng, GameState, Input, Intent,
    PlayerStart, Position, FINAL_DUNGEON_LEVEL, PHASE_DOOR_MANA_COST,
};

/// A game whose level has been replaced by one empty room
fn empty_room_game(seed: u64) -> GameLoop {
    let mut state = GameState::new(GameRng::new(seed), &PlayerStart::default());
    state.map.fill(Tile::Wall);
    state.map.carve_room(&Room::new(10, 10, 20, 10));
    state.monsters.clear();
    state.player.pos = Position::new(15, 15);
    GameLoop::new(state)
}

fn spawn_east(gl: &mut GameLoop, monster: Monster) -> MonsterId {
    let state = gl.state_mut();
    let mut monster = monster;
    monster.pos = state.player.pos.step(Direction::East);
    state.monsters.spawn(monster).unwrap()
}

fn press(gl: &mut GameLoop, intent: Intent) -> GameLoopResult {
    gl.tick(Input::new(intent))
}

#[test]
fn test_damage_and_heal_bounds() {
    let mut state = GameState::new(GameRng::new(77), &PlayerStart::default());
    state.dungeon_level = 4;
    let int = state.player.intelligence;
    for _ in 0..2000 {
        assert!((1..=2 * int).contains(&player_melee_damage(&mut state)));
        assert!((1..=9).contains(&monster_damage(&mut state)));
        assert!((1 + int..=5 + int).contains(&missile_damage(&mut state)));
        assert!((5..=12).contains(&potion_heal_amount(&mut state)));
        assert!((3 + int..=7 + int).contains(&heal_amount(&mut state)));
    }
}

#[test]
fn test_goblin_falls_to_melee() {
    let goblin = template_by_name("Goblin").unwrap();
    let mut one_hit_kills = 0;

    for seed in 0..40 {
        let mut gl = empty_room_game(seed);
        gl.state_mut().player.max_hp = 1000;
        gl.state_mut().player.hp = 1000;
        let id = spawn_east(&mut gl, Monster::from_template(goblin, Position::default()));

        let mut hits = 0;
        while gl.state().monsters.get(id).is_some_and(|m| m.active) {
            press(&mut gl, Intent::Move(Direction::East));
            hits += 1;
            assert!(hits <= goblin.hp, "goblin survived {hits} hits");
        }
        if hits == 1 {
            one_hit_kills += 1;
        }
        assert_eq!(gl.state().player.score, goblin.points);
    }

    // Damage 5..=10 kills outright, so most fights end on the first blow
    assert!(one_hit_kills > 0);
}

#[test]
fn test_starvation_warns_once_and_drains() {
    let mut gl = empty_room_game(5);
    gl.state_mut().player.hunger = 199;
    gl.state_mut().player.food = 0;

    press(&mut gl, Intent::EatFood);
    assert!(gl.state().player.is_starving);
    assert_eq!(gl.state().player.hunger, 200);
    assert_eq!(gl.state().player.hp, 19);
    assert_eq!(gl.state().events(), &[GameEvent::Starving]);

    for expected_hp in [18, 17, 16] {
        press(&mut gl, Intent::EatFood);
        assert_eq!(gl.state().player.hp, expected_hp);
        assert!(gl.state().events().is_empty());
    }

    let warnings = gl
        .state()
        .message_history()
        .filter(|m| *m == "You are starving!")
        .count();
    assert_eq!(warnings, 1);

    // Eating clears the flag; the fifth turn also regenerates
    gl.state_mut().player.food = 1;
    press(&mut gl, Intent::EatFood);
    let player = &gl.state().player;
    assert!(!player.is_starving);
    assert_eq!(player.hunger, 1);
    assert_eq!(player.hp, 17);
}

#[test]
fn test_starving_player_ignores_held_keys() {
    let mut gl = empty_room_game(6);
    gl.state_mut().player.is_starving = true;
    gl.state_mut().player.hunger = 300;
    let start = gl.state().player.pos;

    gl.tick(Input::repeated(Intent::Move(Direction::East)));
    assert_eq!(gl.state().player.pos, start);
    assert_eq!(gl.state().turns, 0);

    gl.tick(Input::new(Intent::Move(Direction::East)));
    assert_eq!(gl.state().player.pos, start.step(Direction::East));
    assert_eq!(gl.state().turns, 1);
}

#[test]
fn test_phase_door_with_nowhere_to_go() {
    let mut gl = empty_room_game(7);
    gl.state_mut().map.fill(Tile::Wall);
    let start = gl.state().player.pos;

    press(&mut gl, Intent::CastPhaseDoor);
    let state = gl.state();
    assert_eq!(state.player.pos, start);
    assert_eq!(state.player.mana, 10 - PHASE_DOOR_MANA_COST);
    assert_eq!(state.turns, 1);
    assert_eq!(
        state.current_message(),
        Some("The spell fails to find a safe location!")
    );
}

#[test]
fn test_two_thresholds_in_one_kill() {
    let mut gl = empty_room_game(8);
    let ogre = template_by_name("Ogre").unwrap();
    let mut monster = Monster::from_template(ogre, Position::default());
    monster.hp = 1;
    monster.points = 470;
    spawn_east(&mut gl, monster);

    press(&mut gl, Intent::Move(Direction::East));
    let state = gl.state();
    assert_eq!(state.mode, GameMode::LevelUp);
    assert_eq!(state.player.level, 3);
    assert_eq!(state.player.xp, 20);
    assert_eq!(state.player.xp_to_next_level, 600);
    assert_eq!(state.player.intelligence, 7);
    assert_eq!(state.player.hp, state.player.max_hp);
}

#[test]
fn test_resting_needs_quiet_and_fresh_keys() {
    let mut gl = empty_room_game(9);

    gl.tick(Input::repeated(Intent::Rest));
    assert_eq!(gl.state().turns, 0);

    press(&mut gl, Intent::Rest);
    assert_eq!(gl.state().turns, 1);
    assert_eq!(gl.state().player.hunger, 6);

    let goblin = template_by_name("Goblin").unwrap();
    spawn_east(&mut gl, Monster::from_template(goblin, Position::default()));
    press(&mut gl, Intent::Rest);
    assert_eq!(gl.state().turns, 1);
    assert_eq!(
        gl.state().current_message(),
        Some("You can't rest while adjacent to a monster!")
    );
}

#[test]
fn test_killing_the_boss_wins() {
    let mut gl = empty_room_game(10);
    gl.state_mut().dungeon_level = FINAL_DUNGEON_LEVEL;
    let mut boss = Monster::from_template(&BOSS_TEMPLATE, Position::default());
    boss.hp = 1;
    spawn_east(&mut gl, boss);

    assert_eq!(press(&mut gl, Intent::Rest), GameLoopResult::Continue);
    assert_eq!(
        press(&mut gl, Intent::Move(Direction::East)),
        GameLoopResult::PlayerWon
    );
    assert_eq!(gl.state().mode, GameMode::Win);
    assert!(gl.state().player.score >= BOSS_TEMPLATE.points);
}

#[test]
fn test_descending_regenerates_level() {
    let mut gl = empty_room_game(11);
    let stairs = gl.state().player.pos.step(Direction::South);
    gl.state_mut().map.set(stairs, Tile::StairsDown);

    press(&mut gl, Intent::Move(Direction::South));
    let state = gl.state();
    assert_eq!(state.dungeon_level, 2);
    assert!(state.events().contains(&GameEvent::Descended { level: 2 }));
    assert!(state.visibility.is_explored(state.player.pos));
    assert!(!state.monsters.is_empty());
}

#[test]
fn test_missile_path_and_turn() {
    let mut gl = empty_room_game(12);
    gl.state_mut().player.mana = 1;

    // Not enough mana: the armed spell still costs the turn
    press(&mut gl, Intent::ArmMagicMissile);
    press(&mut gl, Intent::Move(Direction::West));
    assert_eq!(gl.state().turns, 1);
    assert!(gl.state().last_missile().is_none());
    assert_eq!(
        gl.state().current_message(),
        Some("Not enough mana to cast magic missile!")
    );

    gl.state_mut().player.mana = 10;
    press(&mut gl, Intent::FireMagicMissile(Direction::West));
    let trace = gl.state().last_missile().unwrap();
    assert_eq!(trace.impact, Position::new(9, 15));
    assert_eq!(
        trace.path,
        (10..=14).rev().map(|x| Position::new(x, 15)).collect::<Vec<_>>()
    );
}
