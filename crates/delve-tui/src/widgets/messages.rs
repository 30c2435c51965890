//! Message line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Current game message, or a prompt while a spell waits for a direction
pub struct MessagesWidget<'a> {
    message: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(message: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(msg) = self.message else {
            return;
        };
        Line::styled(msg, Style::default().fg(self.theme.text)).render(area, buf);
    }
}
