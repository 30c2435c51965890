//! Player action system
//!
//! One resolver per intent. Each takes the whole [`GameState`], mutates it,
//! and reports whether the attempt used up the player's turn.
//!
//! [`GameState`]: crate::GameState

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Direction;

pub mod combat;
pub mod item;
pub mod movement;
pub mod rest;
pub mod spell;

/// What the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    Rest,
    CastHeal,
    /// First half of magic missile: wait for a direction
    ArmMagicMissile,
    /// Second half of magic missile
    FireMagicMissile(Direction),
    CastPhaseDoor,
    UseHealthPotion,
    EatFood,
    OpenHelp,
    /// Dismiss an overlay, or quit from play
    Escape,
    /// A key with no binding; still cancels an armed missile
    Unbound,
}

/// An intent plus whether it came from a held key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Input {
    pub intent: Intent,
    pub repeat: bool,
}

impl Input {
    /// A fresh key-press
    pub const fn new(intent: Intent) -> Self {
        Self {
            intent,
            repeat: false,
        }
    }

    /// An auto-repeat from a held key
    pub const fn repeated(intent: Intent) -> Self {
        Self {
            intent,
            repeat: true,
        }
    }
}

impl From<Intent> for Input {
    fn from(intent: Intent) -> Self {
        Self::new(intent)
    }
}

/// Why an action did not do what was asked
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Not enough mana to cast {spell}!")]
    InsufficientMana { spell: &'static str, cost: i32 },
    #[error("You have no health potions!")]
    NoPotions,
    #[error("You have no food!")]
    NoFood,
    /// Wall or map edge; never shown to the player
    #[error("Something blocks your way.")]
    Blocked,
    #[error("You can't rest while adjacent to a monster!")]
    MonsterAdjacent,
    #[error("The spell fails to find a safe location!")]
    NoSafeLocation { attempts: u32 },
}

impl ActionError {
    /// Failed attempts that still cost the turn
    pub const fn consumes_turn(&self) -> bool {
        match self {
            ActionError::InsufficientMana { .. }
            | ActionError::NoPotions
            | ActionError::NoFood
            | ActionError::NoSafeLocation { .. } => true,
            ActionError::Blocked | ActionError::MonsterAdjacent => false,
        }
    }

    /// Whether the player should be told about it
    pub const fn is_reported(&self) -> bool {
        !matches!(self, ActionError::Blocked)
    }
}

/// Result of executing an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Action completed successfully, time passes
    Success,
    /// Action completed but no time passes
    NoTime,
    /// Action failed; the error decides whether time passes
    Failed(ActionError),
}

impl ActionResult {
    pub const fn consumes_turn(&self) -> bool {
        match self {
            ActionResult::Success => true,
            ActionResult::NoTime => false,
            ActionResult::Failed(err) => err.consumes_turn(),
        }
    }
}

impl From<Result<(), ActionError>> for ActionResult {
    fn from(result: Result<(), ActionError>) -> Self {
        match result {
            Ok(()) => ActionResult::Success,
            Err(err) => ActionResult::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ActionError::InsufficientMana {
            spell: "the healing spell",
            cost: 3,
        };
        assert_eq!(err.to_string(), "Not enough mana to cast the healing spell!");
        assert_eq!(ActionError::NoPotions.to_string(), "You have no health potions!");
        assert_eq!(
            ActionError::NoSafeLocation { attempts: 1000 }.to_string(),
            "The spell fails to find a safe location!"
        );
    }

    #[test]
    fn test_turn_accounting() {
        assert!(ActionResult::Success.consumes_turn());
        assert!(!ActionResult::NoTime.consumes_turn());
        assert!(ActionResult::Failed(ActionError::NoFood).consumes_turn());
        assert!(!ActionResult::Failed(ActionError::Blocked).consumes_turn());
        assert!(!ActionResult::Failed(ActionError::MonsterAdjacent).consumes_turn());
    }

    #[test]
    fn test_blocked_is_silent() {
        assert!(!ActionError::Blocked.is_reported());
        assert!(ActionError::MonsterAdjacent.is_reported());
    }

    #[test]
    fn test_input_from_intent() {
        let input: Input = Intent::Rest.into();
        assert!(!input.repeat);
        assert!(Input::repeated(Intent::Rest).repeat);
    }
}
