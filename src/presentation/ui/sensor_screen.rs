//! Accelerometer monitor screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::SensorReading;
use crate::presentation::widgets::{StatusBar, StatusLevel};

/// What the screen asks the orchestrator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorAction {
    /// Nothing.
    None,
    /// Register the sensor subscription.
    Start,
    /// Deregister the sensor subscription.
    Stop,
    /// Navigate back to the API view.
    Back,
}

/// Live accelerometer monitor with a start/stop subscription toggle.
pub struct SensorScreen {
    available: bool,
    monitoring: bool,
    reading: Option<SensorReading>,
}

impl SensorScreen {
    /// Creates the screen; availability is filled in on entry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            available: false,
            monitoring: false,
            reading: None,
        }
    }

    /// Records the availability check result.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Records whether a subscription is live.
    pub fn set_monitoring(&mut self, monitoring: bool) {
        self.monitoring = monitoring;
    }

    /// Overwrites the last-known reading.
    pub fn set_reading(&mut self, reading: SensorReading) {
        self.reading = Some(reading);
    }

    /// Returns whether a subscription is live.
    #[must_use]
    pub const fn is_monitoring(&self) -> bool {
        self.monitoring
    }

    /// Returns the last-known reading.
    #[must_use]
    pub const fn reading(&self) -> Option<SensorReading> {
        self.reading
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> SensorAction {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => SensorAction::Back,
            KeyCode::Char('s') if self.available && !self.monitoring => SensorAction::Start,
            KeyCode::Char('x') if self.monitoring => SensorAction::Stop,
            _ => SensorAction::None,
        }
    }

    fn render_axis_boxes(&self, area: Rect, buf: &mut Buffer) {
        let reading = self.reading.unwrap_or_default();
        let axes = [("X", reading.x), ("Y", reading.y), ("Z", reading.z)];

        let columns = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(14),
            Constraint::Length(2),
            Constraint::Length(14),
            Constraint::Length(2),
            Constraint::Length(14),
            Constraint::Fill(1),
        ]);
        let slots = columns.areas::<7>(area);
        let boxes = [slots[1], slots[3], slots[5]];

        for ((label, value), slot) in axes.iter().zip(boxes) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(format!(" {label} "));
            let inner = block.inner(slot);
            block.render(slot, buf);

            Paragraph::new(Line::from(Span::styled(
                format!("{value:.4}"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )))
            .centered()
            .render(inner, buf);
        }
    }

    fn usage_lines() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "How to Use:",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("- Press 's' to begin monitoring"),
            Line::from("- Move your device to see values change"),
            Line::from("- X-axis: Left/Right tilt"),
            Line::from("- Y-axis: Front/Back tilt"),
            Line::from("- Z-axis: Vertical movement"),
        ]
    }
}

impl Default for SensorScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &SensorScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [header_area, _, boxes_area, _, state_area, usage_area, status_area] =
            layout.areas(area);

        Paragraph::new(Line::from(Span::styled(
            "Sensor Data",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .centered()
        .render(header_area, buf);

        if !self.available {
            Paragraph::new(Line::from(Span::styled(
                "Accelerometer not available on this device",
                Style::default().fg(Color::Red),
            )))
            .centered()
            .render(state_area, buf);

            let status = StatusBar::new()
                .right("Esc: Back | q: Quit")
                .level(StatusLevel::Error);
            (&status).render(status_area, buf);
            return;
        }

        self.render_axis_boxes(boxes_area, buf);

        let state_line = if self.monitoring {
            Line::from(Span::styled(
                "Monitoring",
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from(Span::styled(
                "Stopped",
                Style::default().fg(Color::DarkGray),
            ))
        };
        Paragraph::new(state_line).centered().render(state_area, buf);

        Paragraph::new(SensorScreen::usage_lines()).render(usage_area, buf);

        let hints = if self.monitoring {
            "x: Stop Sensor | Esc: Back | q: Quit"
        } else {
            "s: Start Sensor | Esc: Back | q: Quit"
        };
        let status = StatusBar::new().right(hints).level(StatusLevel::Info);
        (&status).render(status_area, buf);
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
    fn test_start_requires_availability() {
        let mut screen = SensorScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Char('s'))), SensorAction::None);

        screen.set_available(true);
        assert_eq!(screen.handle_key(key(KeyCode::Char('s'))), SensorAction::Start);
    }

    #[test]
    fn test_start_is_ignored_while_monitoring() {
        let mut screen = SensorScreen::new();
        screen.set_available(true);
        screen.set_monitoring(true);

        assert_eq!(screen.handle_key(key(KeyCode::Char('s'))), SensorAction::None);
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), SensorAction::Stop);
    }

    #[test]
    fn test_stop_is_ignored_when_idle() {
        let mut screen = SensorScreen::new();
        screen.set_available(true);

        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), SensorAction::None);
    }

    #[test]
    fn test_last_reading_wins() {
        let mut screen = SensorScreen::new();
        screen.set_reading(SensorReading::new(0.1, 0.2, 1.0));
        screen.set_reading(SensorReading::new(0.3, 0.4, 0.9));

        let reading = screen.reading().unwrap();
        assert!((reading.x - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_back_action() {
        let mut screen = SensorScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), SensorAction::Back);
    }
}
