//! Text input widget.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Single-line text input field.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    placeholder: String,
    label: String,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns focus state.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Applies an editing key. Returns whether the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.value.insert(self.cursor, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                if self.cursor < self.value.len() {
                    self.cursor += 1;
                }
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                false
            }
            _ => false,
        }
    }

    fn display_text(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_style = if self.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);

        let paragraph = Paragraph::new(self.display_text()).style(text_style);

        block.render(area, buf);
        paragraph.render(inner, buf);

        if self.focused && inner.width > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = inner.x + self.cursor as u16;
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TextInput::new("Test");
        assert!(input.value().is_empty());

        assert!(input.handle_key(key(KeyCode::Char('a'))));
        assert!(input.handle_key(key(KeyCode::Char('b'))));
        assert_eq!(input.value(), "ab");

        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_cursor_movement_does_not_change_value() {
        let mut input = TextInput::new("Test");
        input.set_value("abc");

        assert!(!input.handle_key(key(KeyCode::Left)));
        assert!(input.handle_key(key(KeyCode::Char('x'))));
        assert_eq!(input.value(), "abxc");

        assert!(!input.handle_key(key(KeyCode::Home)));
        assert!(input.handle_key(key(KeyCode::Delete)));
        assert_eq!(input.value(), "bxc");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new("Test");
        input.set_value("a");
        input.handle_key(key(KeyCode::Home));

        assert!(!input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "a");
    }
}
