//! REST demo screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::FetchState;
use crate::domain::entities::{Post, RemoteUser};
use crate::domain::ports::PostReceipt;
use crate::presentation::widgets::{ModalPopup, StatusBar, StatusLevel};

/// What the screen asks the orchestrator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAction {
    /// Nothing.
    None,
    /// GET the post list.
    FetchPosts,
    /// POST the fixed draft.
    CreatePost,
    /// PUT the fixed update.
    UpdatePost,
    /// GET the user list.
    FetchUsers,
    /// Navigate to the sensor view.
    OpenSensor,
}

/// REST demo against the public JSON endpoint.
pub struct ApiScreen {
    posts: Vec<Post>,
    users: Vec<RemoteUser>,
    fetch: FetchState,
    alert: Option<ModalPopup>,
    scroll: u16,
}

impl ApiScreen {
    /// Creates an empty screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            users: Vec::new(),
            fetch: FetchState::Idle,
            alert: None,
            scroll: 0,
        }
    }

    /// Returns the current fetch state.
    #[must_use]
    pub const fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    /// Returns whether a request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    /// Returns whether a blocking alert is up.
    #[must_use]
    pub const fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    /// Returns the fetched posts.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Returns the fetched users.
    #[must_use]
    pub fn users(&self) -> &[RemoteUser] {
        &self.users
    }

    /// Marks a request as outstanding.
    pub fn mark_loading(&mut self) {
        self.fetch = FetchState::Loading;
    }

    /// Applies a fetched post list.
    pub fn apply_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.fetch = FetchState::Success;
    }

    /// Applies a fetched user list.
    pub fn apply_users(&mut self, users: Vec<RemoteUser>) {
        self.users = users;
        self.fetch = FetchState::Success;
    }

    /// Applies a failure message.
    pub fn apply_error(&mut self, message: impl Into<String>) {
        self.fetch = FetchState::Error(message.into());
    }

    /// Surfaces a create receipt. The record itself is discarded; the post
    /// list deliberately keeps showing the last fetched state.
    pub fn apply_created(&mut self, receipt: &PostReceipt) {
        self.fetch = FetchState::Success;
        self.alert = Some(ModalPopup::new(
            "Post created successfully!",
            vec![
                format!("ID: {}", receipt.id),
                format!("Title: {}", receipt.title),
            ],
        ));
    }

    /// Surfaces an update receipt, same discard semantics as create.
    pub fn apply_updated(&mut self, receipt: &PostReceipt) {
        self.fetch = FetchState::Success;
        self.alert = Some(ModalPopup::new(
            "Post updated successfully!",
            vec![
                format!("ID: {}", receipt.id),
                format!("New Title: {}", receipt.title),
            ],
        ));
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> ApiAction {
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.alert = None;
            }
            return ApiAction::None;
        }

        match key.code {
            KeyCode::Char('g') => ApiAction::FetchPosts,
            KeyCode::Char('c') => ApiAction::CreatePost,
            KeyCode::Char('u') => ApiAction::UpdatePost,
            KeyCode::Char('r') => ApiAction::FetchUsers,
            KeyCode::Char('v') => ApiAction::OpenSensor,
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                ApiAction::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                ApiAction::None
            }
            _ => ApiAction::None,
        }
    }

    fn operation_row() -> Line<'static> {
        let key_style = Style::default().fg(Color::Black).bg(Color::Gray);
        let mut spans = Vec::new();

        for (key, label, color) in [
            ("g", "GET Posts", Color::Green),
            ("c", "POST Create", Color::Yellow),
            ("u", "PUT Update", Color::Blue),
            ("r", "GET Users", Color::Green),
            ("v", "Sensor View", Color::Magenta),
        ] {
            spans.push(Span::styled(format!(" {key} "), key_style));
            spans.push(Span::styled(
                format!(" {label}  "),
                Style::default().fg(color),
            ));
        }

        Line::from(spans)
    }

    fn content_lines(&self) -> Vec<Line<'_>> {
        let section_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();

        if let Some(error) = self.fetch.error_message() {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Self::operation_row());
        lines.push(Line::from(""));

        if self.is_loading() {
            lines.push(Line::from(Span::styled(
                "Loading...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Posts (GET Response)",
            section_style,
        )));
        if self.posts.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (nothing fetched yet)",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for post in &self.posts {
            lines.push(Line::from(Span::styled(
                format!("  {}", post.title()),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("    {}", post.body())));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Users (GET Response)",
            section_style,
        )));
        if self.users.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (nothing fetched yet)",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for user in &self.users {
            lines.push(Line::from(Span::styled(
                format!("  {}", user.name()),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("    Email: {}", user.email())));
            lines.push(Line::from(format!("    Phone: {}", user.phone())));
        }

        lines
    }
}

impl Default for ApiScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &ApiScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [header_area, sub_area, content_area, status_area] = layout.areas(area);

        Paragraph::new(Line::from(Span::styled(
            "API Integration Demo",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .centered()
        .render(header_area, buf);

        Paragraph::new(Line::from(Span::styled(
            "Using JSONPlaceholder API",
            Style::default().fg(Color::DarkGray),
        )))
        .centered()
        .render(sub_area, buf);

        Paragraph::new(self.content_lines())
            .scroll((self.scroll, 0))
            .render(content_area, buf);

        let status = StatusBar::new()
            .left(if self.is_loading() { "Loading" } else { "" })
            .right("↑↓: Scroll | v: Sensor | q: Quit")
            .level(if self.is_loading() {
                StatusLevel::Warning
            } else {
                StatusLevel::Info
            });
        (&status).render(status_area, buf);

        if let Some(alert) = &self.alert {
            alert.render(area, buf);
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
    fn test_operation_keys_map_to_actions() {
        let mut screen = ApiScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Char('g'))), ApiAction::FetchPosts);
        assert_eq!(screen.handle_key(key(KeyCode::Char('c'))), ApiAction::CreatePost);
        assert_eq!(screen.handle_key(key(KeyCode::Char('u'))), ApiAction::UpdatePost);
        assert_eq!(screen.handle_key(key(KeyCode::Char('r'))), ApiAction::FetchUsers);
        assert_eq!(screen.handle_key(key(KeyCode::Char('v'))), ApiAction::OpenSensor);
    }

    #[test]
    fn test_alert_blocks_operations_until_dismissed() {
        let mut screen = ApiScreen::new();
        screen.apply_created(&PostReceipt {
            id: 101,
            title: "New Assignment Post".into(),
        });
        assert!(screen.has_alert());

        assert_eq!(screen.handle_key(key(KeyCode::Char('g'))), ApiAction::None);
        assert!(screen.has_alert());

        screen.handle_key(key(KeyCode::Enter));
        assert!(!screen.has_alert());
    }

    #[test]
    fn test_created_receipt_does_not_touch_post_list() {
        let mut screen = ApiScreen::new();
        screen.apply_posts(vec![Post::new(1, "existing", "body", 1)]);

        screen.apply_created(&PostReceipt {
            id: 101,
            title: "New Assignment Post".into(),
        });

        assert_eq!(screen.posts().len(), 1);
        assert_eq!(screen.posts()[0].title(), "existing");
    }

    #[test]
    fn test_error_clears_on_next_success() {
        let mut screen = ApiScreen::new();
        screen.mark_loading();
        assert!(screen.is_loading());

        screen.apply_error("Failed to fetch posts");
        assert_eq!(
            screen.fetch_state().error_message(),
            Some("Failed to fetch posts")
        );
        assert!(!screen.is_loading());

        screen.mark_loading();
        screen.apply_posts(vec![]);
        assert_eq!(screen.fetch_state(), &FetchState::Success);
    }
}
