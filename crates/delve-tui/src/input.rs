//! Input handling - convert key events to game inputs
//!
//! Terminals that support the kitty keyboard protocol report held keys as
//! `KeyEventKind::Repeat`; those become repeat inputs so the core can drop
//! them where a fresh key-press is required.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use delve_core::{Direction, Input, Intent};

/// Convert a key event to a game input.
///
/// Key releases produce nothing. Keys with no binding map to
/// [`Intent::Unbound`], which still cancels an armed magic missile.
pub fn key_to_input(key: KeyEvent) -> Option<Input> {
    let intent = match key.kind {
        KeyEventKind::Release => return None,
        KeyEventKind::Press | KeyEventKind::Repeat => key_to_intent(key),
    };
    if key.kind == KeyEventKind::Repeat {
        Some(Input::repeated(intent))
    } else {
        Some(Input::new(intent))
    }
}

/// Key binding table
pub fn key_to_intent(key: KeyEvent) -> Intent {
    // Ctrl+C behaves like Esc
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Intent::Escape,
            _ => Intent::Unbound,
        };
    }

    match key.code {
        // Arrow keys
        KeyCode::Up => Intent::Move(Direction::North),
        KeyCode::Down => Intent::Move(Direction::South),
        KeyCode::Left => Intent::Move(Direction::West),
        KeyCode::Right => Intent::Move(Direction::East),

        KeyCode::Char('r') => Intent::Rest,
        KeyCode::Char('h') => Intent::CastHeal,
        KeyCode::Char('f') => Intent::ArmMagicMissile,
        KeyCode::Char('t') => Intent::CastPhaseDoor,
        KeyCode::Char('p') => Intent::UseHealthPotion,
        KeyCode::Char('e') => Intent::EatFood,
        KeyCode::Char('/') | KeyCode::Char('?') => Intent::OpenHelp,

        KeyCode::Esc => Intent::Escape,

        _ => Intent::Unbound,
    }
}

/// Help overlay text, one binding per line
pub const KEY_HELP: &[(&str, &str)] = &[
    ("Arrow keys", "Move / attack"),
    ("r", "Rest (recover HP/Mana)"),
    ("h", "Cast healing spell"),
    ("f + arrow", "Cast magic missile"),
    ("t", "Cast phase door"),
    ("p", "Use health potion"),
    ("e", "Eat food"),
    ("/", "Show help (this screen)"),
    ("Esc", "Close help / quit"),
];
