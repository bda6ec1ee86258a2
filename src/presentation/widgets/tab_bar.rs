//! Tab bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Horizontal tab navigator line.
///
/// Labels are owned because one of them (the profile tab) changes with the
/// saved name.
pub struct TabBar {
    titles: Vec<String>,
    selected: usize,
    accent: Color,
}

impl TabBar {
    /// Creates a tab bar over the given titles.
    #[must_use]
    pub fn new(titles: Vec<String>, selected: usize) -> Self {
        Self {
            titles,
            selected,
            accent: Color::Cyan,
        }
    }

    /// Overrides the highlight color.
    #[must_use]
    pub const fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();

        for (i, title) in self.titles.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            let style = if i == self.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(self.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            spans.push(Span::styled(format!(" {title} "), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
