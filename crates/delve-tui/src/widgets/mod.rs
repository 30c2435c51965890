//! UI widgets

mod map;
mod messages;
mod screens;
mod status;

pub use map::{MISSILE_GLYPH, MapWidget, camera_origin};
pub use messages::MessagesWidget;
pub use screens::{HelpScreen, LevelUpBanner, Tombstone, WinScreen, centered_rect};
pub use status::{StatusWidget, status_line};
