//! Centered modal popup widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// A blocking popup over the current screen.
///
/// The surrounding screen swallows every key until the popup is dismissed,
/// which is the terminal rendition of a blocking alert/modal.
#[derive(Debug, Clone)]
pub struct ModalPopup {
    title: String,
    lines: Vec<String>,
    accent: Color,
}

impl ModalPopup {
    /// Creates a popup with a title and body lines.
    #[must_use]
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
            accent: Color::Cyan,
        }
    }

    /// Overrides the border color.
    #[must_use]
    pub const fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    /// Returns the popup title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Widget for &ModalPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.title);
        let hint = "Enter/Esc: Close";

        let content_width = self
            .lines
            .iter()
            .map(|l| l.width())
            .chain([title.width(), hint.width()])
            .max()
            .unwrap_or(0);

        let width = u16::try_from(content_width)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.width.saturating_sub(2))
            .max(20);

        #[allow(clippy::cast_possible_truncation)]
        let height = (self.lines.len() as u16)
            .saturating_add(4)
            .min(area.height.saturating_sub(2));

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let popup_area = Rect::new(x, y, width, height);

        let intersection = area.intersection(popup_area);
        if intersection.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(self.accent));

        let mut lines: Vec<Line<'_>> = self
            .lines
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));

        let paragraph = Paragraph::new(lines).block(block);

        Clear.render(intersection, buf);
        paragraph.render(intersection, buf);
    }
}
