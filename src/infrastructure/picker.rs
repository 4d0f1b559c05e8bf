// SPDX-License-Identifier: MPL-2.0
//! Desktop media picker backed by the native file dialog.

use crate::application::port::picker::{MediaPicker, PermissionStatus, PickerError};
use crate::domain::media::MediaKind;
use crate::i18n::fluent::I18n;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// Translated dialog strings for one media kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogText {
    pub title: String,
    pub filter: String,
}

impl DialogText {
    fn localized(i18n: &I18n, kind: MediaKind) -> Self {
        let (title, filter) = match kind {
            MediaKind::Photo => ("upload-dialog-title-photo", "upload-dialog-filter-photo"),
            MediaKind::Video => ("upload-dialog-title-video", "upload-dialog-filter-video"),
        };
        Self {
            title: i18n.tr(title),
            filter: i18n.tr(filter),
        }
    }
}

/// [`MediaPicker`] that opens an `rfd` file dialog filtered by media kind.
///
/// Desktop platforms have no media-library permission gate, so permission is
/// always granted. Dialog strings are resolved once, in the UI language.
#[derive(Debug, Clone)]
pub struct RfdMediaPicker {
    photo: DialogText,
    video: DialogText,
}

impl RfdMediaPicker {
    #[must_use]
    pub fn new(i18n: &I18n) -> Self {
        Self {
            photo: DialogText::localized(i18n, MediaKind::Photo),
            video: DialogText::localized(i18n, MediaKind::Video),
        }
    }

    #[must_use]
    pub fn dialog_text(&self, kind: MediaKind) -> &DialogText {
        match kind {
            MediaKind::Photo => &self.photo,
            MediaKind::Video => &self.video,
        }
    }
}

impl MediaPicker for RfdMediaPicker {
    fn request_permission(&self) -> BoxFuture<'static, PermissionStatus> {
        async { PermissionStatus::Granted }.boxed()
    }

    fn pick_media(&self, kind: MediaKind) -> BoxFuture<'static, Result<Option<String>, PickerError>> {
        let text = self.dialog_text(kind).clone();
        async move {
            let picked = rfd::AsyncFileDialog::new()
                .set_title(text.title)
                .add_filter(text.filter, kind.extensions())
                .pick_file()
                .await;

            let Some(handle) = picked else {
                tracing::debug!(%kind, "media picker dismissed");
                return Ok(None);
            };

            let path = handle.path();
            path.to_str()
                .map(|uri| Some(uri.to_string()))
                .ok_or_else(|| PickerError::InvalidSelection(path.display().to_string()))
        }
        .boxed()
    }
}
