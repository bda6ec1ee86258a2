//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use ratatui::layout::{Constraint, Layout};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::application::LocateCityUseCase;
use crate::domain::entities::{Post, RemoteUser, SensorReading};
use crate::domain::ports::{
    Accelerometer, Locator, NewPost, PlaceholderApi, PostReceipt, PostUpdate, ProfileStore,
};
use crate::infrastructure::sensor::SensorSubscription;
use crate::presentation::events::{self, EventResult};
use crate::presentation::ui::{
    ApiAction, ApiScreen, CompanionAction, CompanionScreen, ContactsScreen, SensorAction,
    SensorScreen,
};
use crate::presentation::widgets::TabBar;

const CREATE_TITLE: &str = "New Assignment Post";
const CREATE_BODY: &str = "This post was created for Assignment 4";
const UPDATE_TITLE: &str = "Updated Assignment Post";
const UPDATE_BODY: &str = "This post was updated for Assignment 4";
const UPDATED_POST_ID: u64 = 1;
const DEMO_USER_ID: u64 = 1;

#[derive(Debug)]
enum Action {
    CityResolved(String),
    CityFailed(String),
    NameLoaded(Option<String>),
    NameSaved(String),
    ProfileFailed(String),
    PostsLoaded(Vec<Post>),
    PostsFailed(String),
    UsersLoaded(Vec<RemoteUser>),
    UsersFailed(String),
    PostCreated(PostReceipt),
    PostUpdated(PostReceipt),
    WriteFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppScreen {
    Contacts,
    Companion,
    Lab,
    Sensor,
}

impl AppScreen {
    const fn switcher_index(self) -> usize {
        match self {
            Self::Contacts => 0,
            Self::Companion => 1,
            Self::Lab | Self::Sensor => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Application orchestrator owning the three demo apps.
pub struct App {
    state: AppState,
    screen: AppScreen,
    contacts: ContactsScreen,
    companion: CompanionScreen,
    api: ApiScreen,
    sensor: SensorScreen,

    locate_use_case: LocateCityUseCase,
    profile_store: Arc<dyn ProfileStore>,
    api_client: Arc<dyn PlaceholderApi>,
    sensor_source: Option<Arc<dyn Accelerometer>>,
    sensor_interval: Duration,

    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    sensor_rx: Option<mpsc::UnboundedReceiver<SensorReading>>,
    subscription: Option<SensorSubscription>,

    companion_mounted: bool,
    lab_mounted: bool,
    users_fetch_pending: bool,
}

impl App {
    /// Creates the application over its ports.
    #[must_use]
    pub fn new(
        locator: Arc<dyn Locator>,
        profile_store: Arc<dyn ProfileStore>,
        api_client: Arc<dyn PlaceholderApi>,
        sensor_source: Option<Arc<dyn Accelerometer>>,
        sensor_interval: Duration,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::Running,
            screen: AppScreen::Contacts,
            contacts: ContactsScreen::new(),
            companion: CompanionScreen::new(),
            api: ApiScreen::new(),
            sensor: SensorScreen::new(),
            locate_use_case: LocateCityUseCase::new(locator),
            profile_store,
            api_client,
            sensor_source,
            sensor_interval,
            action_tx,
            action_rx,
            sensor_rx: None,
            subscription: None,
            companion_mounted: false,
            lab_mounted: false,
            users_fetch_pending: false,
        }
    }

    /// Runs the event loop until quit.
    ///
    /// # Errors
    /// Returns error if terminal drawing fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let sensor_future = match &mut self.sensor_rx {
                Some(rx) => futures_util::future::Either::Left(rx.recv()),
                None => futures_util::future::Either::Right(std::future::pending()),
            };
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(reading) = sensor_future => {
                    self.sensor.set_reading(reading);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_event => {
                    if let Event::Key(key) = event {
                        if self.handle_key(key).await == EventResult::Exit {
                            self.state = AppState::Exiting;
                        }
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.stop_monitoring();
        info!("Application exiting normally");
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let layout = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]);
        let [switcher_area, screen_area] = layout.areas(frame.area());

        frame.render_widget(
            TabBar::new(
                vec![
                    "F1 Contacts".to_string(),
                    "F2 Companion".to_string(),
                    "F3 Lab".to_string(),
                ],
                self.screen.switcher_index(),
            ),
            switcher_area,
        );

        match self.screen {
            AppScreen::Contacts => frame.render_widget(&self.contacts, screen_area),
            AppScreen::Companion => frame.render_widget(&self.companion, screen_area),
            AppScreen::Lab => frame.render_widget(&self.api, screen_area),
            AppScreen::Sensor => frame.render_widget(&self.sensor, screen_area),
        }
    }

    fn modal_open(&self) -> bool {
        match self.screen {
            AppScreen::Contacts => self.contacts.detail().is_some(),
            AppScreen::Lab => self.api.has_alert(),
            _ => false,
        }
    }

    fn wants_text_input(&self) -> bool {
        match self.screen {
            AppScreen::Contacts => true,
            AppScreen::Companion => self.companion.wants_text_input(),
            AppScreen::Lab | AppScreen::Sensor => false,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if events::is_hard_quit(&key) {
            return EventResult::Exit;
        }

        if !self.modal_open() {
            match key.code {
                KeyCode::F(1) => {
                    self.switch_to(AppScreen::Contacts);
                    return EventResult::Continue;
                }
                KeyCode::F(2) => {
                    self.switch_to(AppScreen::Companion);
                    return EventResult::Continue;
                }
                KeyCode::F(3) => {
                    self.switch_to(AppScreen::Lab);
                    return EventResult::Continue;
                }
                _ => {}
            }

            if events::is_soft_quit(&key) && !self.wants_text_input() {
                return EventResult::Exit;
            }
        }

        match self.screen {
            AppScreen::Contacts => self.contacts.handle_key(key),
            AppScreen::Companion => match self.companion.handle_key(key) {
                CompanionAction::SaveName(name) => self.spawn_save_name(name),
                CompanionAction::None => {}
            },
            AppScreen::Lab => match self.api.handle_key(key) {
                ApiAction::FetchPosts => self.begin_fetch_posts(),
                ApiAction::CreatePost => self.begin_create_post(),
                ApiAction::UpdatePost => self.begin_update_post(),
                ApiAction::FetchUsers => self.begin_fetch_users(),
                ApiAction::OpenSensor => self.open_sensor().await,
                ApiAction::None => {}
            },
            AppScreen::Sensor => match self.sensor.handle_key(key) {
                SensorAction::Start => self.start_monitoring(),
                SensorAction::Stop => self.stop_monitoring(),
                SensorAction::Back => {
                    // Leaving the view unmounts the subscription with it.
                    self.stop_monitoring();
                    self.screen = AppScreen::Lab;
                }
                SensorAction::None => {}
            },
        }

        EventResult::Continue
    }

    fn switch_to(&mut self, target: AppScreen) {
        if self.screen == target {
            return;
        }

        if self.screen == AppScreen::Sensor {
            self.stop_monitoring();
        }

        self.screen = target;

        match target {
            AppScreen::Companion if !self.companion_mounted => {
                self.companion_mounted = true;
                self.spawn_locate();
                self.spawn_load_name();
            }
            AppScreen::Lab if !self.lab_mounted => {
                self.lab_mounted = true;
                self.users_fetch_pending = true;
                self.begin_fetch_posts();
            }
            _ => {}
        }
    }

    async fn open_sensor(&mut self) {
        let available = match &self.sensor_source {
            Some(source) => source.is_available().await,
            None => false,
        };
        self.sensor.set_available(available);
        self.screen = AppScreen::Sensor;
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::CityResolved(city) => self.companion.set_city(city),
            Action::CityFailed(message) => self.companion.set_location_error(message),
            Action::NameLoaded(name) => self.companion.set_loaded_name(name),
            Action::NameSaved(name) => self.companion.note_saved(name),
            Action::ProfileFailed(message) => self.companion.note_profile_error(message),
            Action::PostsLoaded(posts) => {
                self.api.apply_posts(posts);
                self.continue_lab_mount();
            }
            Action::PostsFailed(message) => {
                self.api.apply_error(message);
                self.continue_lab_mount();
            }
            Action::UsersLoaded(users) => self.api.apply_users(users),
            Action::UsersFailed(message) => self.api.apply_error(message),
            Action::PostCreated(receipt) => self.api.apply_created(&receipt),
            Action::PostUpdated(receipt) => self.api.apply_updated(&receipt),
            Action::WriteFailed(message) => self.api.apply_error(message),
        }
    }

    /// The screen mount fetches posts then users; the user fetch waits for
    /// the post fetch to settle so only one request is ever outstanding.
    fn continue_lab_mount(&mut self) {
        if self.users_fetch_pending {
            self.users_fetch_pending = false;
            self.begin_fetch_users();
        }
    }

    fn spawn_locate(&self) {
        let use_case = self.locate_use_case.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            match use_case.execute().await {
                Ok(city) => {
                    let _ = tx.send(Action::CityResolved(city));
                }
                Err(e) => {
                    error!(error = %e, "City lookup failed");
                    let _ = tx.send(Action::CityFailed(e.to_string()));
                }
            }
        });
    }

    fn spawn_load_name(&self) {
        let store = self.profile_store.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            match store.load_name().await {
                Ok(name) => {
                    let _ = tx.send(Action::NameLoaded(name));
                }
                Err(e) => {
                    error!(error = %e, "Failed to load name");
                    let _ = tx.send(Action::ProfileFailed("Failed to load name".to_string()));
                }
            }
        });
    }

    fn spawn_save_name(&self, name: String) {
        let store = self.profile_store.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            match store.save_name(&name).await {
                Ok(()) => {
                    let _ = tx.send(Action::NameSaved(name));
                }
                Err(e) => {
                    error!(error = %e, "Failed to save name");
                    let _ = tx.send(Action::ProfileFailed("Failed to save name".to_string()));
                }
            }
        });
    }

    fn begin_fetch_posts(&mut self) {
        if self.api.is_loading() {
            debug!("Fetch ignored while a request is outstanding");
            return;
        }
        self.api.mark_loading();

        let api = self.api_client.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            match api.fetch_posts().await {
                Ok(posts) => {
                    let _ = tx.send(Action::PostsLoaded(posts));
                }
                Err(e) => {
                    error!(error = %e, "Post fetch failed");
                    let _ = tx.send(Action::PostsFailed("Failed to fetch posts".to_string()));
                }
            }
        });
    }

    fn begin_fetch_users(&mut self) {
        if self.api.is_loading() {
            debug!("Fetch ignored while a request is outstanding");
            return;
        }
        self.api.mark_loading();

        let api = self.api_client.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            match api.fetch_users().await {
                Ok(users) => {
                    let _ = tx.send(Action::UsersLoaded(users));
                }
                Err(e) => {
                    error!(error = %e, "User fetch failed");
                    let _ = tx.send(Action::UsersFailed("Failed to fetch users".to_string()));
                }
            }
        });
    }

    fn begin_create_post(&mut self) {
        if self.api.is_loading() {
            debug!("Create ignored while a request is outstanding");
            return;
        }
        self.api.mark_loading();

        let api = self.api_client.clone();
        let tx = self.action_tx.clone();
        let draft = NewPost {
            title: CREATE_TITLE.to_string(),
            body: CREATE_BODY.to_string(),
            user_id: DEMO_USER_ID,
        };

        tokio::spawn(async move {
            match api.create_post(&draft).await {
                Ok(receipt) => {
                    let _ = tx.send(Action::PostCreated(receipt));
                }
                Err(e) => {
                    error!(error = %e, "Post create failed");
                    let _ = tx.send(Action::WriteFailed("Failed to create post".to_string()));
                }
            }
        });
    }

    fn begin_update_post(&mut self) {
        if self.api.is_loading() {
            debug!("Update ignored while a request is outstanding");
            return;
        }
        self.api.mark_loading();

        let api = self.api_client.clone();
        let tx = self.action_tx.clone();
        let update = PostUpdate {
            id: UPDATED_POST_ID,
            title: UPDATE_TITLE.to_string(),
            body: UPDATE_BODY.to_string(),
            user_id: DEMO_USER_ID,
        };

        tokio::spawn(async move {
            match api.update_post(&update).await {
                Ok(receipt) => {
                    let _ = tx.send(Action::PostUpdated(receipt));
                }
                Err(e) => {
                    error!(error = %e, "Post update failed");
                    let _ = tx.send(Action::WriteFailed("Failed to update post".to_string()));
                }
            }
        });
    }

    fn start_monitoring(&mut self) {
        let Some(source) = &self.sensor_source else {
            return;
        };

        // Re-registering replaces any previous sampler so at most one is live.
        if let Some(previous) = self.subscription.take() {
            previous.remove();
        }

        let (tx, rx) = mpsc::unbounded_channel();
        self.subscription = Some(SensorSubscription::start(
            source.clone(),
            self.sensor_interval,
            tx,
        ));
        self.sensor_rx = Some(rx);
        self.sensor.set_monitoring(true);

        debug!("Sensor subscription registered");
    }

    fn stop_monitoring(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.remove();
            debug!("Sensor subscription removed");
        }
        self.sensor_rx = None;
        self.sensor.set_monitoring(false);
    }
}
