//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use delve_core::dungeon::Tile;
use delve_core::{GameState, Position as MapPos, S_PLAYER};

use crate::theme::Theme;

/// Glyph for a magic missile in flight
pub const MISSILE_GLYPH: char = '*';

/// Top-left map tile shown in a `view_w` x `view_h` viewport.
///
/// Centres on `focus` and clamps so the view never runs past the map edge.
/// A viewport larger than the map pins to the origin.
pub fn camera_origin(
    focus: MapPos,
    view_w: u16,
    view_h: u16,
    map_w: usize,
    map_h: usize,
) -> MapPos {
    let axis = |focus: i32, view: u16, size: usize| {
        let max = (size as i32 - view as i32).max(0);
        (focus - view as i32 / 2).clamp(0, max)
    };
    MapPos::new(
        axis(focus.x, view_w, map_w),
        axis(focus.y, view_h, map_h),
    )
}

/// Widget for rendering the dungeon map
pub struct MapWidget<'a> {
    state: &'a GameState,
    theme: &'a Theme,
    missile: Option<MapPos>,
}

impl<'a> MapWidget<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            missile: None,
        }
    }

    /// Draw a missile glyph at `pos` on top of everything but the player
    pub fn missile(mut self, pos: Option<MapPos>) -> Self {
        self.missile = pos;
        self
    }

    fn cell_display(&self, pos: MapPos) -> (char, Style) {
        let state = self.state;

        // If not explored, show nothing (space)
        if !state.visibility.is_explored(pos) {
            return (' ', Style::default());
        }

        if pos == state.player.pos {
            return (S_PLAYER, Style::default().fg(self.theme.map_player).bold());
        }

        if self.missile == Some(pos) {
            return (MISSILE_GLYPH, Style::default().fg(self.theme.map_missile).bold());
        }

        let in_sight = state.in_sight(pos);

        // Monsters are only drawn while in sight
        if in_sight
            && let Some(monster) = state
                .monsters
                .monster_at(pos)
                .and_then(|id| state.monsters.get(id))
        {
            let color = if monster.is_boss() {
                self.theme.map_boss
            } else {
                self.theme.map_monster
            };
            return (monster.symbol, Style::default().fg(color));
        }

        let Some(tile) = state.map.tile(pos) else {
            return (' ', Style::default());
        };
        let base_color = match tile {
            Tile::Wall => self.theme.map_wall,
            Tile::Floor => self.theme.map_floor,
            Tile::StairsDown => self.theme.map_stairs,
            Tile::Potion => self.theme.map_potion,
            Tile::Food => self.theme.map_food,
        };

        // Dim explored but not visible cells
        let color = if in_sight {
            base_color
        } else {
            self.theme.map_explored
        };

        (tile.symbol(), Style::default().fg(color))
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Delve: Dungeon Level {}", self.state.dungeon_level);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let map = &self.state.map;
        let origin = camera_origin(
            self.state.player.pos,
            inner.width,
            inner.height,
            map.width(),
            map.height(),
        );

        for dy in 0..inner.height {
            for dx in 0..inner.width {
                let pos = MapPos::new(origin.x + dx as i32, origin.y + dy as i32);
                if !map.in_bounds(pos) {
                    continue;
                }
                let (ch, style) = self.cell_display(pos);
                if let Some(cell) = buf.cell_mut(Position::new(inner.x + dx, inner.y + dy)) {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
