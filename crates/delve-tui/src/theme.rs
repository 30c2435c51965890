//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with --light flag
//! or DELVE_LIGHT_BG=1 environment variable.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which palette to use, as written in the config file
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeChoice {
    /// Guess from the terminal environment
    #[default]
    Auto,
    Dark,
    Light,
}

/// Color theme for terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,

    // Borders
    /// Default border color
    pub border: Color,
    /// Informational border (help, level-up)
    pub border_accent: Color,
    /// Danger border (death screen)
    pub border_danger: Color,

    // Semantic colors
    pub header: Color,
    pub good: Color,
    pub bad: Color,

    // Map terrain
    pub map_wall: Color,
    pub map_floor: Color,
    /// Explored tiles outside the visibility radius
    pub map_explored: Color,
    pub map_stairs: Color,
    pub map_potion: Color,
    pub map_food: Color,

    // Map creatures
    pub map_player: Color,
    pub map_monster: Color,
    pub map_boss: Color,
    pub map_missile: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            border_accent: Color::Cyan,
            border_danger: Color::Red,
            header: Color::Yellow,
            good: Color::Green,
            bad: Color::Red,
            map_wall: Color::Gray,
            map_floor: Color::White,
            map_explored: Color::DarkGray,
            map_stairs: Color::Yellow,
            map_potion: Color::Magenta,
            map_food: Color::LightRed,
            map_player: Color::White,
            map_monster: Color::Red,
            map_boss: Color::LightMagenta,
            map_missile: Color::Cyan,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            border_danger: Color::Red,
            header: Color::Blue,
            good: Color::Green,
            bad: Color::Red,
            map_wall: Color::DarkGray,
            map_floor: Color::Black,
            map_explored: Color::Gray,
            map_stairs: Color::Blue,
            map_potion: Color::Magenta,
            map_food: Color::Red,
            map_player: Color::Black,
            map_monster: Color::Red,
            map_boss: Color::Magenta,
            map_missile: Color::Blue,
        }
    }

    /// Auto-detect terminal background and return appropriate theme
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Resolve a config-file choice; `force_light` is the `--light` flag
    pub fn from_choice(choice: ThemeChoice, force_light: bool) -> Self {
        if force_light {
            return Self::light();
        }
        match choice {
            ThemeChoice::Auto => Self::detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    fn is_light_background() -> bool {
        // Explicit override via environment variable
        if let Ok(val) = std::env::var("DELVE_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        std::env::var("COLORFGBG").is_ok_and(|v| colorfgbg_is_light(&v))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether a COLORFGBG value ("fg;bg", indices 0-15) names a light background.
/// Light backgrounds have bg index 7 or 9..=15 (8 is bright black).
pub fn colorfgbg_is_light(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| matches!(bg, 7 | 9..=15))
}
