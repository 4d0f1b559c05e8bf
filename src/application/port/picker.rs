// SPDX-License-Identifier: MPL-2.0
//! Media picker port definition.
//!
//! The upload form never talks to a file dialog or a platform permission API
//! directly. It asks a [`MediaPicker`] for permission, then for a single
//! photo or video, and gets back a URI string (a local path on desktop).

use crate::domain::media::MediaKind;
use futures_util::future::BoxFuture;
use thiserror::Error;

/// Answer to a media-library permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Errors a picker can report while choosing media.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PickerError {
    /// No picker could be shown on this platform or session.
    #[error("media picker unavailable: {0}")]
    Unavailable(String),

    /// The picked entry could not be turned into a usable URI.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

/// Port for choosing a photo or video from the user's media library.
///
/// Both methods return `'static` futures so callers can hand them straight to
/// `Task::perform`.
pub trait MediaPicker: Send + Sync {
    /// Asks for access to the media library.
    fn request_permission(&self) -> BoxFuture<'static, PermissionStatus>;

    /// Lets the user choose one item of `kind`.
    ///
    /// Resolves to `Ok(None)` when the user cancels.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError`] if the picker cannot be shown or the
    /// selection is unusable.
    fn pick_media(&self, kind: MediaKind) -> BoxFuture<'static, Result<Option<String>, PickerError>>;
}

/// Result of a complete permission-then-pick round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Picked(String),
    Cancelled,
    PermissionDenied,
    Failed(PickerError),
}

/// Requests permission and, if granted, opens the picker for `kind`.
pub async fn pick_with_permission(picker: &dyn MediaPicker, kind: MediaKind) -> PickOutcome {
    if !picker.request_permission().await.is_granted() {
        return PickOutcome::PermissionDenied;
    }
    match picker.pick_media(kind).await {
        Ok(Some(uri)) => PickOutcome::Picked(uri),
        Ok(None) => PickOutcome::Cancelled,
        Err(err) => PickOutcome::Failed(err),
    }
}
