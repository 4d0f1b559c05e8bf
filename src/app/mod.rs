// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the session phases and
//! the signed-in screens.
//!
//! The `App` struct owns the session phase, the current screen with its
//! state, the alert surface and the collaborators the screens need. Screens
//! report what happened through events; this module decides what that means
//! for the rest of the app (sign-in, navigation, toasts).

mod message;
pub mod paths;
pub mod routing;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use routing::Route;
pub use screen::Screen;

use crate::application::port::MediaPicker;
use crate::config::{self, Config};
use crate::domain::activity::{self, Activity};
use crate::i18n::fluent::I18n;
use crate::infrastructure::picker::RfdMediaPicker;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::SpinnerPhase;
use crate::ui::{auth, upload};
use iced::{task, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Where the user is in the sign-in lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// The startup session check is still running.
    Checking,
    SignedOut,
    SignedIn { email: String },
}

impl Session {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !matches!(self, Session::Checking)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::SignedIn { .. })
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    session: Session,
    screen: Screen,
    auth: auth::State,
    notifications: notifications::Manager,
    upload: upload::Context,
    theme_mode: ThemeMode,
    spinner: SpinnerPhase,
    activities: Vec<Activity>,
    /// Aborts the startup session check when dropped.
    auth_check: Option<task::Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("screen", &self.screen)
            .field("locale", &self.i18n.current_locale().to_string())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;
pub const MIN_WINDOW_WIDTH: f32 = 400.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        Self::boot(flags, config, warning, |i18n| Arc::new(RfdMediaPicker::new(i18n)))
    }

    /// Builds the app from already-loaded configuration and starts the
    /// session check. `picker` is built once the UI language is known.
    pub(crate) fn boot(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
        picker: impl FnOnce(&I18n) -> Arc<dyn MediaPicker>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);
        let picker = picker(&i18n);
        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let delay = config.session.auth_check_delay();
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            |()| Message::AuthCheckFinished,
        )
        .abortable();
        tracing::debug!(?delay, "checking stored session");

        let app = Self {
            i18n,
            theme_mode: config.general.theme_mode,
            upload: upload::Context {
                picker,
                schedule: upload::UploadSchedule::from_config(&config.upload),
            },
            config,
            session: Session::Checking,
            screen: Screen::default(),
            auth: auth::State::new(),
            notifications,
            spinner: SpinnerPhase::default(),
            activities: activity::sample_activities(),
            auth_check: Some(handle.abort_on_drop()),
        };

        (app, task)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.screen {
            _ if !self.session.is_authenticated() => app_name,
            Screen::Dashboard => app_name,
            Screen::Roster(_) => format!("{} - {app_name}", self.i18n.tr("roster-title")),
            Screen::Gallery(_) => format!("{} - {app_name}", self.i18n.tr("gallery-title")),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.is_animating(),
            self.notifications.has_expiring(),
        )
    }

    /// Returns `true` while a spinner is on screen.
    fn is_animating(&self) -> bool {
        !self.session.is_ready() || self.screen.is_uploading()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let animating = self.is_animating();
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            session: &mut self.session,
            screen: &mut self.screen,
            auth: &mut self.auth,
            notifications: &mut self.notifications,
            upload: &self.upload,
            spinner: &mut self.spinner,
            auth_check: &mut self.auth_check,
        };
        update::update(&mut ctx, message, animating)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            club: &self.config.club,
            session: &self.session,
            screen: &self.screen,
            auth: &self.auth,
            notifications: &self.notifications,
            spinner: self.spinner,
            activities: &self.activities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::picker::fake::FakePicker;
    use crate::application::port::PickOutcome;
    use crate::domain::auth::Field;
    use crate::ui::notifications::Severity;
    use crate::ui::{dashboard, gallery, roster};

    fn app() -> App {
        let (app, _) = App::boot(
            Flags {
                lang: Some("en-US".into()),
                config_dir: None,
            },
            Config::default(),
            None,
            |_| Arc::new(FakePicker::picking("/tmp/team.jpg")),
        );
        app
    }

    fn signed_in() -> App {
        let mut app = app();
        let _ = app.update(Message::AuthCheckFinished);
        for (field, value) in [(Field::Email, "coach@club.org"), (Field::Password, "secret1")] {
            let _ = app.update(Message::Auth(auth::Message::FieldChanged(field, value.into())));
        }
        let _ = app.update(Message::Auth(auth::Message::Submit));
        app
    }

    fn navigate(app: &mut App, route: &str) {
        let _ = app.update(Message::Dashboard(dashboard::Message::Navigate(route.into())));
    }

    #[test]
    fn boots_into_session_check() {
        let app = app();
        assert_eq!(app.session(), &Session::Checking);
        assert!(!app.session().is_ready());
        assert!(app.auth_check.is_some());
    }

    #[test]
    fn session_check_completion_signs_out() {
        let mut app = app();
        let _ = app.update(Message::AuthCheckFinished);
        assert_eq!(app.session(), &Session::SignedOut);
        assert!(app.session().is_ready());
        assert!(!app.session().is_authenticated());
        assert!(app.auth_check.is_none());
    }

    #[test]
    fn config_warning_becomes_a_toast() {
        let (app, _) = App::boot(
            Flags::default(),
            Config::default(),
            Some("notification-config-load-error".into()),
            |_| Arc::new(FakePicker::picking("/tmp/x.jpg")),
        );
        let latest = app.notifications().latest().map(|n| (n.severity(), n.message_key()));
        assert_eq!(
            latest,
            Some((Severity::Warning, "notification-config-load-error"))
        );
    }

    #[test]
    fn valid_login_signs_in_and_shows_dashboard() {
        let app = signed_in();
        assert_eq!(
            app.session(),
            &Session::SignedIn {
                email: "coach@club.org".into()
            }
        );
        assert!(app.screen().is_dashboard());
        assert_eq!(app.auth.fields().get(Field::Email), "");
    }

    #[test]
    fn invalid_login_stays_signed_out() {
        let mut app = app();
        let _ = app.update(Message::AuthCheckFinished);
        let _ = app.update(Message::Auth(auth::Message::Submit));
        assert_eq!(app.session(), &Session::SignedOut);
        assert!(!app.auth.errors().is_empty());
    }

    #[test]
    fn dashboard_routes_switch_screens() {
        let mut app = signed_in();
        navigate(&mut app, dashboard::ROUTE_PLAYER_PROFILES);
        assert!(matches!(app.screen(), Screen::Roster(_)));

        let _ = app.update(Message::Roster(roster::Message::Exit));
        assert!(app.screen().is_dashboard());

        navigate(&mut app, dashboard::ROUTE_MEDIA_GALLERY);
        assert!(matches!(app.screen(), Screen::Gallery(_)));

        let _ = app.update(Message::Gallery(gallery::Message::Back));
        assert!(app.screen().is_dashboard());
    }

    #[test]
    fn stub_and_unknown_routes_keep_the_dashboard() {
        let mut app = signed_in();
        for route in [dashboard::ROUTE_CLUB_INFO, "/activity/1", "/nowhere"] {
            navigate(&mut app, route);
            assert!(app.screen().is_dashboard(), "{route}");
        }
    }

    #[test]
    fn logout_drops_screen_state() {
        let mut app = signed_in();
        navigate(&mut app, dashboard::ROUTE_PLAYER_PROFILES);
        let _ = app.update(Message::Roster(roster::Message::QueryChanged("kim".into())));

        let _ = app.update(Message::Dashboard(dashboard::Message::Logout));
        assert_eq!(app.session(), &Session::SignedOut);
        assert!(app.screen().is_dashboard());
        assert_eq!(app.auth.mode(), crate::domain::auth::AuthMode::Login);
    }

    #[test]
    fn upload_alerts_and_completion_reach_the_toast_surface() {
        let mut app = signed_in();
        navigate(&mut app, dashboard::ROUTE_MEDIA_GALLERY);
        let _ = app.update(Message::Gallery(gallery::Message::OpenUpload));

        let _ = app.update(Message::Gallery(gallery::Message::Upload(upload::Message::Submit)));
        assert_eq!(
            app.notifications().latest().and_then(Notification::title_key),
            Some("alert-missing-media-title")
        );

        for message in [
            upload::Message::PickFinished(PickOutcome::Picked("/tmp/team.jpg".into())),
            upload::Message::DescriptionChanged("Team photo".into()),
            upload::Message::Submit,
        ] {
            let _ = app.update(Message::Gallery(gallery::Message::Upload(message)));
        }
        assert!(app.screen().is_uploading());
        assert!(app.is_animating());
    }

    #[test]
    fn leaving_the_gallery_cancels_the_upload() {
        let mut app = signed_in();
        navigate(&mut app, dashboard::ROUTE_MEDIA_GALLERY);
        let _ = app.update(Message::Gallery(gallery::Message::OpenUpload));
        for message in [
            upload::Message::PickFinished(PickOutcome::Picked("/tmp/team.jpg".into())),
            upload::Message::DescriptionChanged("Team photo".into()),
            upload::Message::Submit,
        ] {
            let _ = app.update(Message::Gallery(gallery::Message::Upload(message)));
        }
        let _ = app.update(Message::Gallery(gallery::Message::Back));
        assert!(!app.screen().is_uploading());
        assert!(!app.is_animating());
    }

    #[test]
    fn sticky_error_toast_does_not_keep_the_tick_alive() {
        let mut app = signed_in();
        app.notifications.clear();
        app.notifications
            .push(Notification::error("alert-pick-failed-message").with_title("alert-error-title"));

        assert!(app.notifications().has_notifications());
        assert!(!app.is_animating());
        assert!(!app.notifications().has_expiring());

        app.notifications.push(Notification::success("alert-success-message"));
        assert!(app.notifications().has_expiring());
    }

    #[test]
    fn title_names_the_current_screen() {
        let mut app = signed_in();
        assert_eq!(app.title(), "Football Club App");
        navigate(&mut app, dashboard::ROUTE_PLAYER_PROFILES);
        assert_eq!(app.title(), "Player Profiles - Football Club App");
    }
}
