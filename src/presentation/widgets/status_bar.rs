//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// One-line status bar with a message on the left and key hints on the right.
#[derive(Debug, Clone)]
pub struct StatusBar {
    left: String,
    right: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            level: StatusLevel::Info,
        }
    }

    /// Sets left content.
    #[must_use]
    pub fn left(mut self, content: impl Into<String>) -> Self {
        self.left = content.into();
        self
    }

    /// Sets right content.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }

    /// Sets status level.
    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    /// Creates error status bar.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().left(message).level(StatusLevel::Error)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let left_style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);
        let right_style = Style::default().fg(Color::DarkGray);

        let width = area.width as usize;
        let left_len = self.left.len();
        let right_len = self.right.len();

        let mut spans = vec![Span::styled(&self.left, left_style)];

        let padding = width.saturating_sub(left_len + right_len);
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
        }

        if !self.right.is_empty() {
            spans.push(Span::styled(&self.right, right_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
