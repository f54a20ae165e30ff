//! TUI Application State
//!
//! Owns the active profile screen, forwards component actions to the
//! caller's [`ProfileHandler`] and runs simulated saves in the background.

use super::edit::ProfileEdit;
use super::events::{EventHandler, TuiEvent, keys};
use super::form::WizardAction;
use super::profile_card::{CardAction, ProfileCard};
use super::setup::{ProfileSetup, SetupLayout};
use super::theme::Theme;
use crate::profile::{ConnectionStatus, Profile, ProfileDraft};
use crate::services::ProfileService;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;

/// Callbacks supplied by whoever hosts the profile screens.
///
/// Every method defaults to a no-op so callers only implement what they use.
pub trait ProfileHandler: Send {
    fn on_connect(&mut self, _profile: &Profile) {}
    fn on_message(&mut self, _profile: &Profile) {}
    fn on_share(&mut self, _profile: &Profile) {}
    fn on_open_profile(&mut self, _profile: &Profile) {}

    /// Setup wizard finished its save
    fn on_complete(&mut self, _draft: &ProfileDraft) {}
    /// Setup page left from its first step
    fn on_back(&mut self) {}
    /// A modal was dismissed
    fn on_close(&mut self) {}
    /// Edit wizard finished its save
    fn on_save(&mut self, _draft: &ProfileDraft) {}
}

/// The screen currently shown
pub enum Screen {
    Card(ProfileCard),
    Setup(ProfileSetup),
    Edit(ProfileEdit),
    /// A wizard finished or was dismissed
    Closed,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Card(_) => "card",
            Screen::Setup(setup) => match setup.layout {
                SetupLayout::Modal => "setup-modal",
                SetupLayout::Page => "setup-page",
            },
            Screen::Edit(_) => "edit",
            Screen::Closed => "closed",
        }
    }
}

/// Main application state
pub struct App<H: ProfileHandler> {
    pub screen: Screen,
    handler: H,
    service: Arc<dyn ProfileService>,
    event_handler: EventHandler,
    pub theme: Theme,

    /// Spinner frame, advanced on every tick
    pub animation_frame: usize,

    pub should_quit: bool,
}

impl<H: ProfileHandler> App<H> {
    pub fn new(screen: Screen, handler: H, service: Arc<dyn ProfileService>) -> Self {
        tracing::debug!("Opening {} screen", screen.name());
        Self {
            screen,
            handler,
            service,
            event_handler: EventHandler::new(),
            theme: Theme::default(),
            animation_frame: 0,
            should_quit: false,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Get event sender
    pub fn event_sender(&self) -> tokio::sync::mpsc::UnboundedSender<TuiEvent> {
        self.event_handler.sender()
    }

    /// Receive next event
    pub async fn next_event(&mut self) -> Option<TuiEvent> {
        self.event_handler.next().await
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Handle an event
    pub async fn handle_event(&mut self, event: TuiEvent) -> Result<()> {
        match event {
            TuiEvent::Key(key_event) => {
                self.handle_key_event(key_event);
            }
            TuiEvent::SubmitFinished(result) => {
                self.finish_submit(result);
            }
            TuiEvent::Quit => {
                self.should_quit = true;
            }
            TuiEvent::Tick => {
                self.animation_frame = self.animation_frame.wrapping_add(1);
            }
            TuiEvent::Resize(_, _) => {
                // Handled by the render loop
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, event: KeyEvent) {
        if keys::is_quit(&event) {
            tracing::info!("Quit requested from {} screen", self.screen.name());
            self.should_quit = true;
            return;
        }

        match &mut self.screen {
            Screen::Card(card) => {
                if matches!(event.code, KeyCode::Esc | KeyCode::Char('q')) {
                    self.should_quit = true;
                    return;
                }
                let action = card.handle_key(event);
                self.dispatch_card_action(action);
            }
            Screen::Setup(setup) => {
                let layout = setup.layout;
                match setup.handle_key(event) {
                    WizardAction::None => {}
                    WizardAction::Cancel => {
                        match layout {
                            SetupLayout::Page => self.handler.on_back(),
                            SetupLayout::Modal => self.handler.on_close(),
                        }
                        self.close();
                    }
                    WizardAction::Submit(draft) => self.spawn_submit(draft, true),
                }
            }
            Screen::Edit(edit) => match edit.handle_key(event) {
                WizardAction::None => {}
                WizardAction::Cancel => {
                    self.handler.on_close();
                    self.close();
                }
                WizardAction::Submit(draft) => self.spawn_submit(draft, false),
            },
            Screen::Closed => {}
        }
    }

    fn dispatch_card_action(&mut self, action: CardAction) {
        match action {
            CardAction::None => {}
            CardAction::Connect(profile) => {
                self.handler.on_connect(&profile);
                if let Screen::Card(card) = &mut self.screen {
                    card.set_connection_status(ConnectionStatus::Pending);
                }
            }
            CardAction::Message(profile) => self.handler.on_message(&profile),
            CardAction::Share(profile) => self.handler.on_share(&profile),
            CardAction::OpenProfile(profile) => self.handler.on_open_profile(&profile),
        }
    }

    /// Run the save in the background; the result comes back as
    /// `TuiEvent::SubmitFinished`
    fn spawn_submit(&self, draft: ProfileDraft, create: bool) {
        let service = Arc::clone(&self.service);
        let event_sender = self.event_sender();

        tokio::spawn(async move {
            let result = if create {
                service.create_profile(draft).await
            } else {
                service.update_profile(draft).await
            };
            let _ = event_sender.send(TuiEvent::SubmitFinished(result.map_err(|e| e.to_string())));
        });
    }

    fn finish_submit(&mut self, result: std::result::Result<ProfileDraft, String>) {
        match (&mut self.screen, result) {
            (Screen::Setup(setup), Ok(draft)) => {
                setup.finish_submit();
                self.handler.on_complete(&draft);
                self.close();
            }
            (Screen::Edit(edit), Ok(draft)) => {
                edit.finish_submit();
                self.handler.on_save(&draft);
                self.close();
            }
            (Screen::Setup(setup), Err(e)) => {
                tracing::error!("Profile creation failed: {}", e);
                setup.finish_submit();
                setup.form.errors = vec![e];
            }
            (Screen::Edit(edit), Err(e)) => {
                tracing::error!("Profile update failed: {}", e);
                edit.finish_submit();
                edit.form.errors = vec![e];
            }
            (screen, _) => {
                tracing::warn!("Save finished with no wizard open ({})", screen.name());
            }
        }
    }

    fn close(&mut self) {
        tracing::debug!("Closing {} screen", self.screen.name());
        self.screen = Screen::Closed;
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ProfileKitError, Result as KitResult};
    use crate::services::SimulatedProfileService;
    use crate::tui::form::test_support::{ctrl, key};
    use async_trait::async_trait;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingHandler {
        calls: Vec<String>,
        completed: Vec<ProfileDraft>,
        saved: Vec<ProfileDraft>,
    }

    impl ProfileHandler for RecordingHandler {
        fn on_connect(&mut self, profile: &Profile) {
            self.calls.push(format!("connect:{}", profile.draft.name));
        }
        fn on_message(&mut self, profile: &Profile) {
            self.calls.push(format!("message:{}", profile.draft.name));
        }
        fn on_share(&mut self, profile: &Profile) {
            self.calls.push(format!("share:{}", profile.draft.name));
        }
        fn on_open_profile(&mut self, profile: &Profile) {
            self.calls.push(format!("open:{}", profile.draft.name));
        }
        fn on_complete(&mut self, draft: &ProfileDraft) {
            self.completed.push(draft.clone());
        }
        fn on_back(&mut self) {
            self.calls.push("back".to_string());
        }
        fn on_close(&mut self) {
            self.calls.push("close".to_string());
        }
        fn on_save(&mut self, draft: &ProfileDraft) {
            self.saved.push(draft.clone());
        }
    }

    struct FailingService;

    #[async_trait]
    impl ProfileService for FailingService {
        async fn create_profile(&self, _draft: ProfileDraft) -> KitResult<ProfileDraft> {
            Err(ProfileKitError::Service("backend unavailable".to_string()))
        }
        async fn update_profile(&self, _draft: ProfileDraft) -> KitResult<ProfileDraft> {
            Err(ProfileKitError::Service("backend unavailable".to_string()))
        }
    }

    fn instant() -> Arc<dyn ProfileService> {
        Arc::new(SimulatedProfileService::new(Duration::ZERO))
    }

    fn app(screen: Screen) -> App<RecordingHandler> {
        App::new(screen, RecordingHandler::default(), instant())
    }

    async fn press(app: &mut App<RecordingHandler>, event: KeyEvent) {
        app.handle_event(TuiEvent::Key(event)).await.unwrap();
    }

    async fn type_text(app: &mut App<RecordingHandler>, text: &str) {
        for c in text.chars() {
            press(app, key(KeyCode::Char(c))).await;
        }
    }

    async fn fill_setup(app: &mut App<RecordingHandler>) {
        type_text(app, "Ada").await;
        press(app, key(KeyCode::Tab)).await;
        press(app, key(KeyCode::Tab)).await;
        type_text(app, "London").await;
        press(app, ctrl('n')).await;

        press(app, key(KeyCode::Tab)).await;
        type_text(app, "Systems").await;
        press(app, key(KeyCode::Tab)).await;
        type_text(app, "Engineer").await;
        press(app, ctrl('n')).await;

        type_text(app, "Rust").await;
        press(app, key(KeyCode::Enter)).await;
    }

    #[tokio::test]
    async fn test_setup_completes_once() {
        let mut app = app(Screen::Setup(ProfileSetup::new(SetupLayout::Modal)));
        fill_setup(&mut app).await;

        press(&mut app, ctrl('s')).await;
        // Second submit while the first is in flight is ignored
        press(&mut app, ctrl('s')).await;
        assert!(!app.should_quit);

        let event = app.next_event().await.unwrap();
        assert!(matches!(event, TuiEvent::SubmitFinished(Ok(_))));
        app.handle_event(event).await.unwrap();
        assert!(app.event_handler.try_next().is_none());

        assert!(app.should_quit);
        assert!(matches!(app.screen, Screen::Closed));
        let handler = app.into_handler();
        assert_eq!(handler.completed.len(), 1);
        let draft = &handler.completed[0];
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.location, "London");
        assert_eq!(draft.focus, "Systems");
        assert_eq!(draft.bio, "Engineer");
        assert_eq!(draft.skills, vec!["Rust".to_string()]);
        assert!(handler.calls.is_empty());
    }

    #[tokio::test]
    async fn test_setup_cancel_routes_by_layout() {
        let mut modal = app(Screen::Setup(ProfileSetup::new(SetupLayout::Modal)));
        press(&mut modal, key(KeyCode::Esc)).await;
        assert!(modal.should_quit);
        assert_eq!(modal.handler().calls, vec!["close".to_string()]);

        let mut page = app(Screen::Setup(ProfileSetup::new(SetupLayout::Page)));
        press(&mut page, key(KeyCode::Esc)).await;
        assert_eq!(page.handler().calls, vec!["back".to_string()]);
        assert!(page.handler().completed.is_empty());
    }

    #[tokio::test]
    async fn test_edit_save_calls_on_save() {
        let mut app = app(Screen::Edit(ProfileEdit::new(Profile::sample().draft)));
        press(&mut app, key(KeyCode::Char('!'))).await;
        press(&mut app, ctrl('s')).await;

        let event = app.next_event().await.unwrap();
        app.handle_event(event).await.unwrap();

        let handler = app.into_handler();
        assert_eq!(handler.saved.len(), 1);
        assert_eq!(handler.saved[0].name, "Ada Lovelace!");
        assert!(handler.completed.is_empty());
    }

    #[tokio::test]
    async fn test_edit_esc_closes() {
        let mut app = app(Screen::Edit(ProfileEdit::new(Profile::sample().draft)));
        press(&mut app, key(KeyCode::Esc)).await;
        assert!(app.should_quit);
        assert_eq!(app.handler().calls, vec!["close".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_save_unlocks_form() {
        let mut app = App::new(
            Screen::Edit(ProfileEdit::new(Profile::sample().draft)),
            RecordingHandler::default(),
            Arc::new(FailingService),
        );
        press(&mut app, ctrl('s')).await;
        let event = app.next_event().await.unwrap();
        app.handle_event(event).await.unwrap();

        assert!(!app.should_quit);
        let Screen::Edit(edit) = &app.screen else {
            panic!("edit screen should stay open");
        };
        assert!(!edit.form.is_loading());
        assert_eq!(edit.form.errors.len(), 1);
        assert!(edit.form.errors[0].contains("backend unavailable"));
        assert!(app.handler().saved.is_empty());
    }

    #[tokio::test]
    async fn test_card_connect_marks_pending() {
        let mut app = app(Screen::Card(ProfileCard::new(Profile::sample())));
        press(&mut app, key(KeyCode::Char('c'))).await;
        // Connect is disabled once pending
        press(&mut app, key(KeyCode::Char('c'))).await;
        press(&mut app, key(KeyCode::Char('s'))).await;
        // Message stays disabled until accepted
        press(&mut app, key(KeyCode::Char('m'))).await;

        assert_eq!(
            app.handler().calls,
            vec![
                "connect:Ada Lovelace".to_string(),
                "share:Ada Lovelace".to_string()
            ]
        );
        let Screen::Card(card) = &app.screen else {
            panic!("card screen expected");
        };
        assert_eq!(card.connection_status(), ConnectionStatus::Pending);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_without_callbacks() {
        let mut app = app(Screen::Setup(ProfileSetup::new(SetupLayout::Modal)));
        press(&mut app, ctrl('c')).await;
        assert!(app.should_quit);
        assert!(app.handler().calls.is_empty());
    }

    #[tokio::test]
    async fn test_tick_advances_animation() {
        let mut app = app(Screen::Card(ProfileCard::new(Profile::sample())));
        app.handle_event(TuiEvent::Tick).await.unwrap();
        app.handle_event(TuiEvent::Tick).await.unwrap();
        assert_eq!(app.animation_frame, 2);
    }
}
