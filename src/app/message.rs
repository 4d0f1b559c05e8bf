// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{auth, dashboard, gallery, notifications, roster};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The startup session check finished.
    AuthCheckFinished,
    Auth(auth::Message),
    Dashboard(dashboard::Message),
    Gallery(gallery::Message),
    Roster(roster::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for the spinner and toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `CLUB_HUB_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
