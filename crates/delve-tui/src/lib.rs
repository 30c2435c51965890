//! delve-tui: Terminal UI layer using ratatui
//!
//! Draws a [`delve_core::GameState`] and turns key events into inputs.

pub mod app;
pub mod config;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use config::{TuiConfig, TuiConfigError};
pub use input::{key_to_input, key_to_intent};
pub use theme::{Theme, ThemeChoice};
