//! Full-screen and overlay panels: help, level-up, tombstone, victory

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use delve_core::monster::BOSS_NAME;

use crate::input::KEY_HELP;
use crate::theme::Theme;

const TOMBSTONE: [&str; 6] = [
    "   .---.   ",
    "  /     \\  ",
    "  | RIP |  ",
    "  |     |  ",
    "  |     |  ",
    "  '-----'  ",
];

/// Help overlay
pub struct HelpScreen<'a> {
    theme: &'a Theme,
}

impl<'a> HelpScreen<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_rect(60, 70, area);
        Clear.render(area, buf);

        let mut lines = vec![Line::styled(
            "--- Controls ---",
            Style::default().fg(self.theme.header).bold(),
        )];
        lines.push(Line::default());
        for (key, action) in KEY_HELP {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<12}", key), Style::default().fg(self.theme.header)),
                Span::styled(*action, Style::default().fg(self.theme.text)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "Press ESC to return to the game",
            Style::default().fg(self.theme.text_dim),
        ));

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Level-up banner over the map
pub struct LevelUpBanner<'a> {
    level: u32,
    theme: &'a Theme,
}

impl<'a> LevelUpBanner<'a> {
    pub fn new(level: u32, theme: &'a Theme) -> Self {
        Self { level, theme }
    }
}

impl Widget for LevelUpBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_box(32, 3, area);
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));
        Paragraph::new(Line::styled(
            format!("Welcome to Level {}!", self.level),
            Style::default().fg(self.theme.good).bold(),
        ))
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
    }
}

/// Game-over screen
pub struct Tombstone<'a> {
    cause: &'a str,
    score: i32,
    theme: &'a Theme,
}

impl<'a> Tombstone<'a> {
    pub fn new(cause: &'a str, score: i32, theme: &'a Theme) -> Self {
        Self {
            cause,
            score,
            theme,
        }
    }
}

impl Widget for Tombstone<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let text = Style::default().fg(self.theme.text);

        let mut lines: Vec<Line> = TOMBSTONE.iter().map(|l| Line::styled(*l, text)).collect();
        lines.push(Line::default());
        lines.push(Line::styled(
            "You have died!",
            Style::default().fg(self.theme.bad).bold(),
        ));
        lines.push(Line::styled(format!("Cause of Death: {}", self.cause), text));
        lines.push(Line::styled(format!("Final Score: {}", self.score), text));
        lines.push(Line::default());
        lines.push(Line::styled(
            "Press any key to exit",
            Style::default().fg(self.theme.text_dim),
        ));

        let height = lines.len() as u16 + 2;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_danger));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(centered_box(44, height, area), buf);
    }
}

/// Victory screen
pub struct WinScreen<'a> {
    score: i32,
    theme: &'a Theme,
}

impl<'a> WinScreen<'a> {
    pub fn new(score: i32, theme: &'a Theme) -> Self {
        Self { score, theme }
    }
}

impl Widget for WinScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let text = Style::default().fg(self.theme.text);
        let lines = vec![
            Line::styled(
                "Congratulations!",
                Style::default().fg(self.theme.good).bold(),
            ),
            Line::default(),
            Line::styled(format!("You have defeated the {}!", BOSS_NAME), text),
            Line::styled(format!("Final Score: {}", self.score), text),
            Line::default(),
            Line::styled(
                "Press any key to exit",
                Style::default().fg(self.theme.text_dim),
            ),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(centered_box(44, 8, area), buf);
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A fixed-size box centred in `r`, shrunk to fit
fn centered_box(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_tombstone_contents() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Tombstone::new("Ogre", 140, &theme).render(area, &mut buf);
        let text = screen_text(&buf);
        assert!(text.contains("RIP"));
        assert!(text.contains("You have died!"));
        assert!(text.contains("Cause of Death: Ogre"));
        assert!(text.contains("Final Score: 140"));
    }

    #[test]
    fn test_win_and_levelup_text() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 80, 24);

        let mut buf = Buffer::empty(area);
        WinScreen::new(1500, &theme).render(area, &mut buf);
        let text = screen_text(&buf);
        assert!(text.contains("Congratulations!"));
        assert!(text.contains("You have defeated the Lich Lord!"));
        assert!(text.contains("Final Score: 1500"));

        let mut buf = Buffer::empty(area);
        LevelUpBanner::new(3, &theme).render(area, &mut buf);
        assert!(screen_text(&buf).contains("Welcome to Level 3!"));
    }

    #[test]
    fn test_help_lists_every_binding() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        HelpScreen::new(&theme).render(area, &mut buf);
        let text = screen_text(&buf);
        for (_, action) in KEY_HELP {
            assert!(text.contains(action), "missing {action}");
        }
    }

    #[test]
    fn test_centered_box_fits_small_area() {
        let r = centered_box(44, 14, Rect::new(0, 0, 20, 10));
        assert_eq!(r, Rect::new(0, 0, 20, 10));
        let r = centered_box(10, 4, Rect::new(5, 5, 20, 10));
        assert_eq!(r, Rect::new(10, 8, 10, 4));
    }
}
