//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use delve_core::player::Player;

use crate::theme::Theme;

/// The one-line stat summary
pub fn status_line(p: &Player, dungeon_level: u32) -> String {
    format!(
        "HP {}/{} | Mana {}/{} | Int {} | Score {} | Potions {} | Food {} | Lvl {} | XP {}/{} | Dlvl {}",
        p.hp,
        p.max_hp,
        p.mana,
        p.max_mana,
        p.intelligence,
        p.score,
        p.health_potions,
        p.food,
        p.level,
        p.xp,
        p.xp_to_next_level,
        dungeon_level,
    )
}

/// Widget for rendering the status line
pub struct StatusWidget<'a> {
    player: &'a Player,
    dungeon_level: u32,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(player: &'a Player, dungeon_level: u32, theme: &'a Theme) -> Self {
        Self {
            player,
            dungeon_level,
            theme,
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            status_line(self.player, self.dungeon_level),
            Style::default().fg(self.theme.text),
        )];

        // Status conditions
        if self.player.is_starving {
            spans.push(Span::styled(
                " Starving",
                Style::default().fg(self.theme.bad).bold(),
            ));
        } else if self.player.is_famished() {
            spans.push(Span::styled(" Hungry", Style::default().fg(self.theme.header)));
        }

        Line::from(spans).render(area, buf);
    }
}
