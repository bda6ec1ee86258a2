//! Contact directory screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::entities::{Contact, ContactGroup, sample_directory};
use crate::domain::filter::filter_directory;
use crate::presentation::widgets::{ModalPopup, StatusBar, StatusLevel, TextInput};

/// Searchable grouped contact directory with a detail popup.
pub struct ContactsScreen {
    groups: Vec<ContactGroup>,
    search: TextInput,
    filtered: Vec<ContactGroup>,
    selected: usize,
    detail: Option<Contact>,
}

impl ContactsScreen {
    /// Creates the screen over the sample directory.
    #[must_use]
    pub fn new() -> Self {
        let groups = sample_directory();
        let filtered = groups.clone();

        let mut search = TextInput::new("Search").placeholder("Search by name or number");
        search.set_focused(true);

        Self {
            groups,
            search,
            filtered,
            selected: 0,
            detail: None,
        }
    }

    /// Returns the groups currently shown.
    #[must_use]
    pub fn filtered(&self) -> &[ContactGroup] {
        &self.filtered
    }

    /// Returns the open detail popup's contact, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&Contact> {
        self.detail.as_ref()
    }

    /// Returns the current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        self.search.value()
    }

    fn visible_count(&self) -> usize {
        self.filtered.iter().map(|g| g.contacts.len()).sum()
    }

    fn selected_contact(&self) -> Option<&Contact> {
        self.filtered
            .iter()
            .flat_map(|g| g.contacts.iter())
            .nth(self.selected)
    }

    fn refilter(&mut self) {
        self.filtered = filter_directory(&self.groups, self.search.value());
        self.selected = 0;
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.detail.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.detail = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if !self.search.value().is_empty() {
                    self.search.clear();
                    self.refilter();
                }
            }
            KeyCode::Enter => {
                self.detail = self.selected_contact().cloned();
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let last = self.visible_count().saturating_sub(1);
                if self.selected < last {
                    self.selected += 1;
                }
            }
            _ => {
                if self.search.handle_key(key) {
                    self.refilter();
                }
            }
        }
    }

    fn list_lines(&self) -> (Vec<Line<'_>>, usize) {
        let mut lines = Vec::new();
        let mut selected_line = 0;
        let mut flat_index = 0;

        for group in &self.filtered {
            lines.push(Line::from(Span::styled(
                format!(" {} ", group.title),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )));

            for contact in &group.contacts {
                let is_selected = flat_index == self.selected;
                let style = if is_selected {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::White)
                };

                if is_selected {
                    selected_line = lines.len();
                }

                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<12}", contact.name()), style),
                    Span::styled(
                        contact.number().to_string(),
                        style.add_modifier(Modifier::DIM),
                    ),
                ]));
                flat_index += 1;
            }
        }

        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No contacts match",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        (lines, selected_line)
    }
}

impl Default for ContactsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &ContactsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [header_area, search_area, list_area, status_area] = layout.areas(area);

        Paragraph::new(Line::from(Span::styled(
            "Contacts Manager",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .centered()
        .render(header_area, buf);

        (&self.search).render(search_area, buf);

        let (lines, selected_line) = self.list_lines();
        let viewport = list_area.height as usize;
        let scroll = selected_line.saturating_sub(viewport.saturating_sub(1));

        #[allow(clippy::cast_possible_truncation)]
        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .render(list_area, buf);

        let status = StatusBar::new()
            .left(format!("{} contacts", self.visible_count()))
            .right("↑↓: Select | Enter: Details | Esc: Clear | Ctrl+C: Quit")
            .level(StatusLevel::Info);
        (&status).render(status_area, buf);

        if let Some(contact) = &self.detail {
            let popup = ModalPopup::new(
                "Contact Details",
                vec![
                    format!("Name: {}", contact.name()),
                    format!("Number: {}", contact.number()),
                    format!("Group: {}", contact.group()),
                ],
            );
            (&popup).render(area, buf);
        }
    }
}
