// SPDX-License-Identifier: MPL-2.0
//! Screens shown to a signed-in user.

use crate::ui::{gallery, roster};

/// The signed-in screen and the state it owns. Leaving a screen drops its
/// state, including any upload still running in the gallery.
#[derive(Debug, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Roster(roster::State),
    Gallery(gallery::State),
}

impl Screen {
    #[must_use]
    pub fn is_dashboard(&self) -> bool {
        matches!(self, Screen::Dashboard)
    }

    /// Returns `true` while the gallery has an upload in flight.
    #[must_use]
    pub fn is_uploading(&self) -> bool {
        match self {
            Screen::Gallery(gallery) => gallery.upload().is_some_and(|form| form.is_uploading()),
            _ => false,
        }
    }
}
