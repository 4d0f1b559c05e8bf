// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screen components report events; the handlers here turn them into session
//! changes, navigation and toasts.

use super::routing::{self, Route};
use super::{Message, Screen, Session};
use crate::domain::auth::ValidatedCredentials;
use crate::domain::media::{MediaKind, UploadedMedia};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::widgets::SpinnerPhase;
use crate::ui::{auth, dashboard, gallery, roster, upload};
use iced::{task, Task};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a mut Session,
    pub screen: &'a mut Screen,
    pub auth: &'a mut auth::State,
    pub notifications: &'a mut notifications::Manager,
    pub upload: &'a upload::Context,
    pub spinner: &'a mut SpinnerPhase,
    pub auth_check: &'a mut Option<task::Handle>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message, animating: bool) -> Task<Message> {
    match message {
        Message::AuthCheckFinished => {
            handle_auth_check_finished(ctx);
            Task::none()
        }
        Message::Auth(message) => {
            handle_auth_message(ctx, message);
            Task::none()
        }
        Message::Dashboard(message) => {
            handle_dashboard_message(ctx, message);
            Task::none()
        }
        Message::Gallery(message) => handle_gallery_message(ctx, message),
        Message::Roster(message) => {
            handle_roster_message(ctx, message);
            Task::none()
        }
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(_) => {
            if animating {
                ctx.spinner.advance();
            }
            ctx.notifications.tick();
            Task::none()
        }
    }
}

fn handle_auth_check_finished(ctx: &mut UpdateContext<'_>) {
    *ctx.auth_check = None;
    if *ctx.session == Session::Checking {
        tracing::debug!("no stored session, showing sign-in");
        *ctx.session = Session::SignedOut;
    }
}

fn handle_auth_message(ctx: &mut UpdateContext<'_>, message: auth::Message) {
    if *ctx.session != Session::SignedOut {
        return;
    }
    match ctx.auth.update(message) {
        auth::Event::None => {}
        auth::Event::Authenticated(credentials) => on_login(ctx, &credentials),
    }
}

/// Signs the user in. Any validated credentials are accepted.
fn on_login(ctx: &mut UpdateContext<'_>, credentials: &ValidatedCredentials) {
    tracing::info!(
        email = %credentials.email(),
        signup = credentials.username().is_some(),
        "login attempt"
    );
    *ctx.session = Session::SignedIn {
        email: credentials.email().to_string(),
    };
    *ctx.auth = auth::State::new();
    *ctx.screen = Screen::Dashboard;
}

fn on_logout(ctx: &mut UpdateContext<'_>) {
    tracing::info!("signed out");
    *ctx.session = Session::SignedOut;
    *ctx.screen = Screen::Dashboard;
    *ctx.auth = auth::State::new();
}

fn handle_dashboard_message(ctx: &mut UpdateContext<'_>, message: dashboard::Message) {
    if !ctx.session.is_authenticated() {
        return;
    }
    match dashboard::update(message) {
        dashboard::Event::Navigate(route) => navigate(ctx, &route),
        dashboard::Event::Logout => on_logout(ctx),
    }
}

fn navigate(ctx: &mut UpdateContext<'_>, route: &str) {
    match routing::navigate(route) {
        Some(Route::PlayerProfiles) => *ctx.screen = Screen::Roster(roster::State::default()),
        Some(Route::MediaGallery) => *ctx.screen = Screen::Gallery(gallery::State::default()),
        Some(_) | None => {}
    }
}

fn kind_name(i18n: &I18n, kind: MediaKind) -> String {
    let key = match kind {
        MediaKind::Photo => "media-kind-photo",
        MediaKind::Video => "media-kind-video",
    };
    i18n.tr(key).to_lowercase()
}

fn on_media_uploaded(ctx: &mut UpdateContext<'_>, media: &UploadedMedia) {
    tracing::info!(
        kind = %media.kind,
        uri = %media.uri,
        description = %media.description,
        "media uploaded"
    );
    ctx.notifications.push(
        Notification::success("alert-success-message")
            .with_title("alert-success-title")
            .with_arg("kind", kind_name(ctx.i18n, media.kind)),
    );
}

fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    let Screen::Gallery(state) = &mut *ctx.screen else {
        return Task::none();
    };
    let (event, task) = state.update(message, ctx.upload);
    match event {
        gallery::Event::None => {}
        gallery::Event::MediaSelected(item) => {
            tracing::debug!(id = %item.id, kind = %item.kind, "media selected");
        }
        gallery::Event::MediaUploaded(media) => on_media_uploaded(ctx, &media),
        gallery::Event::Alert(notification) => ctx.notifications.push(notification),
        gallery::Event::Exit => *ctx.screen = Screen::Dashboard,
    }
    task.map(Message::Gallery)
}

fn handle_roster_message(ctx: &mut UpdateContext<'_>, message: roster::Message) {
    let Screen::Roster(state) = &mut *ctx.screen else {
        return;
    };
    match state.update(message) {
        roster::Event::None => {}
        roster::Event::PlayerSelected(player) => {
            tracing::debug!(player = %player.name, number = player.number, "player selected");
        }
        roster::Event::Exit => *ctx.screen = Screen::Dashboard,
    }
}
