//! Tabbed companion screen: location, profile, and settings.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::widgets::{StatusBar, StatusLevel, TabBar, TextInput};

/// Active companion tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanionTab {
    /// One-shot city lookup.
    #[default]
    Home,
    /// Persisted profile name.
    Profile,
    /// Static placeholder.
    Settings,
}

impl CompanionTab {
    const fn next(self) -> Self {
        match self {
            Self::Home => Self::Profile,
            Self::Profile => Self::Settings,
            Self::Settings => Self::Home,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Home => Self::Settings,
            Self::Profile => Self::Home,
            Self::Settings => Self::Profile,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Profile => 1,
            Self::Settings => 2,
        }
    }
}

/// Result of a profile save attempt, shown inline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum ProfileNote {
    #[default]
    None,
    Saved,
    Error(String),
}

/// What the screen asks the orchestrator to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanionAction {
    /// Nothing.
    None,
    /// Persist the given profile name.
    SaveName(String),
}

/// Three independent tabs behind one bottom navigator.
pub struct CompanionScreen {
    tab: CompanionTab,
    city: Option<String>,
    location_error: Option<String>,
    name_input: TextInput,
    saved_name: Option<String>,
    profile_note: ProfileNote,
}

impl CompanionScreen {
    /// Creates the screen on the home tab.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tab: CompanionTab::Home,
            city: None,
            location_error: None,
            name_input: TextInput::new("Your name").placeholder("Enter your name"),
            saved_name: None,
            profile_note: ProfileNote::None,
        }
    }

    /// Returns the active tab.
    #[must_use]
    pub const fn tab(&self) -> CompanionTab {
        self.tab
    }

    /// Returns whether the active tab owns a text input.
    #[must_use]
    pub const fn wants_text_input(&self) -> bool {
        matches!(self.tab, CompanionTab::Profile)
    }

    /// Records the resolved city.
    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = Some(city.into());
        self.location_error = None;
    }

    /// Records a location failure.
    pub fn set_location_error(&mut self, message: impl Into<String>) {
        self.location_error = Some(message.into());
    }

    /// Applies the loaded profile name.
    pub fn set_loaded_name(&mut self, name: Option<String>) {
        if let Some(name) = &name {
            self.name_input.set_value(name.clone());
        }
        self.saved_name = name;
    }

    /// Marks the last save as successful.
    pub fn note_saved(&mut self, name: impl Into<String>) {
        self.saved_name = Some(name.into());
        self.profile_note = ProfileNote::Saved;
    }

    /// Marks the last profile operation as failed.
    pub fn note_profile_error(&mut self, message: impl Into<String>) {
        self.profile_note = ProfileNote::Error(message.into());
    }

    /// Title of the profile tab, reflecting the saved name.
    #[must_use]
    pub fn profile_title(&self) -> String {
        self.saved_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("Profile")
            .to_string()
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> CompanionAction {
        match key.code {
            KeyCode::Tab => {
                self.tab = self.tab.next();
                self.sync_focus();
            }
            KeyCode::BackTab => {
                self.tab = self.tab.previous();
                self.sync_focus();
            }
            KeyCode::Left if !self.wants_text_input() => {
                self.tab = self.tab.previous();
                self.sync_focus();
            }
            KeyCode::Right if !self.wants_text_input() => {
                self.tab = self.tab.next();
                self.sync_focus();
            }
            KeyCode::Enter if self.tab == CompanionTab::Profile => {
                self.profile_note = ProfileNote::None;
                return CompanionAction::SaveName(self.name_input.value().to_string());
            }
            _ if self.tab == CompanionTab::Profile => {
                if self.name_input.handle_key(key) {
                    self.profile_note = ProfileNote::None;
                }
            }
            _ => {}
        }

        CompanionAction::None
    }

    fn sync_focus(&mut self) {
        self.name_input
            .set_focused(self.tab == CompanionTab::Profile);
    }

    fn render_home(&self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(Span::styled(
            "Home",
            Style::default().add_modifier(Modifier::BOLD),
        ));

        let body = if let Some(error) = &self.location_error {
            Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
        } else {
            let city = self.city.as_deref().unwrap_or("Loading...");
            Line::from(format!("Your city: {city}"))
        };

        Paragraph::new(vec![title, Line::from(""), body])
            .centered()
            .render(area, buf);
    }

    fn render_profile(&self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ]);
        let [title_area, _, input_area, note_area] = layout.areas(area);

        Paragraph::new(Line::from(Span::styled(
            self.profile_title(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .centered()
        .render(title_area, buf);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(40),
            Constraint::Fill(1),
        ]);
        let [_, centered_input, _] = horizontal.areas(input_area);
        (&self.name_input).render(centered_input, buf);

        let note = match &self.profile_note {
            ProfileNote::None => Line::default(),
            ProfileNote::Saved => Line::from(Span::styled(
                "Name saved",
                Style::default().fg(Color::Green),
            )),
            ProfileNote::Error(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )),
        };
        Paragraph::new(note).centered().render(note_area, buf);
    }

    fn render_settings(area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                "Settings",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Settings content goes here"),
        ];
        Paragraph::new(lines).centered().render(area, buf);
    }
}

impl Default for CompanionScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &CompanionScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [tabs_area, _, content_area, _, status_area] = layout.areas(area);

        TabBar::new(
            vec![
                "Home".to_string(),
                self.profile_title(),
                "Settings".to_string(),
            ],
            self.tab.index(),
        )
        .render(tabs_area, buf);

        match self.tab {
            CompanionTab::Home => self.render_home(content_area, buf),
            CompanionTab::Profile => self.render_profile(content_area, buf),
            CompanionTab::Settings => CompanionScreen::render_settings(content_area, buf),
        }

        let hints = if self.wants_text_input() {
            "Tab: Next tab | Enter: Save Name | Ctrl+C: Quit"
        } else {
            "Tab/←→: Switch tab | q: Quit"
        };
        let status = StatusBar::new().right(hints).level(StatusLevel::Info);
        (&status).render(status_area, buf);
    }
}
