// SPDX-License-Identifier: MPL-2.0
//! Club media gallery: photo/video tabs, a grid of items, a detail modal and
//! the upload modal.

mod view;

pub use view::{view, ViewContext};

use crate::domain::media::{self, MediaId, MediaItem, MediaKind, UploadedMedia};
use crate::ui::notifications::Notification;
use crate::ui::upload;
use iced::Task;

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(MediaKind),
    ItemPressed(MediaId),
    CloseDetail,
    OpenUpload,
    CloseUpload,
    Upload(upload::Message),
    Back,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    MediaSelected(MediaItem),
    MediaUploaded(UploadedMedia),
    Alert(Notification),
    /// Leave the gallery for the dashboard.
    Exit,
}

#[derive(Debug)]
pub struct State {
    items: Vec<MediaItem>,
    active_tab: MediaKind,
    selected: Option<MediaItem>,
    upload: Option<upload::State>,
    can_upload: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(media::sample_gallery(), true)
    }
}

impl State {
    #[must_use]
    pub fn new(items: Vec<MediaItem>, can_upload: bool) -> Self {
        Self {
            items,
            active_tab: MediaKind::Photo,
            selected: None,
            upload: None,
            can_upload,
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> MediaKind {
        self.active_tab
    }

    #[must_use]
    pub fn selected(&self) -> Option<&MediaItem> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn upload(&self) -> Option<&upload::State> {
        self.upload.as_ref()
    }

    #[must_use]
    pub fn is_upload_open(&self) -> bool {
        self.upload.is_some()
    }

    #[must_use]
    pub fn can_upload(&self) -> bool {
        self.can_upload
    }

    /// Items of the active tab, in their original order.
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&MediaItem> {
        media::filter_by_kind(&self.items, self.active_tab)
    }

    pub fn set_tab(&mut self, tab: MediaKind) {
        self.active_tab = tab;
    }

    /// Opens the detail view for `id`; unknown ids are ignored.
    pub fn select_item(&mut self, id: &MediaId) -> Option<MediaItem> {
        let item = self.items.iter().find(|item| &item.id == id)?.clone();
        self.selected = Some(item.clone());
        Some(item)
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Mounts a fresh upload form.
    pub fn open_upload(&mut self) {
        if self.can_upload {
            self.upload = Some(upload::State::new());
        }
    }

    /// Unmounts the upload form, cancelling any upload in flight.
    pub fn close_upload(&mut self) {
        if let Some(form) = self.upload.take() {
            if form.is_uploading() {
                tracing::info!("upload cancelled by closing the form");
            }
        }
    }

    pub fn update(&mut self, message: Message, ctx: &upload::Context) -> (Event, Task<Message>) {
        match message {
            Message::TabSelected(tab) => {
                self.set_tab(tab);
                (Event::None, Task::none())
            }
            Message::ItemPressed(id) => {
                let event = self.select_item(&id).map_or(Event::None, Event::MediaSelected);
                (event, Task::none())
            }
            Message::CloseDetail => {
                self.close_detail();
                (Event::None, Task::none())
            }
            Message::OpenUpload => {
                self.open_upload();
                (Event::None, Task::none())
            }
            Message::CloseUpload => {
                self.close_upload();
                (Event::None, Task::none())
            }
            Message::Upload(message) => {
                let Some(form) = self.upload.as_mut() else {
                    // Late message for a form that was already closed.
                    return (Event::None, Task::none());
                };
                let (event, task) = form.update(message, ctx);
                let event = match event {
                    upload::Event::None => Event::None,
                    upload::Event::Alert(notification) => Event::Alert(notification),
                    upload::Event::Completed(media) => Event::MediaUploaded(media),
                };
                (event, task.map(Message::Upload))
            }
            Message::Back => (Event::Exit, Task::none()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::picker::fake::FakePicker;
    use std::sync::Arc;

    fn context() -> upload::Context {
        upload::Context {
            picker: Arc::new(FakePicker::picking("/tmp/pitch.jpg")),
            schedule: upload::UploadSchedule::default(),
        }
    }

    fn ids(state: &State) -> Vec<&str> {
        state.filtered_items().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn photos_tab_is_the_default() {
        let state = State::default();
        assert_eq!(state.active_tab(), MediaKind::Photo);
        assert_eq!(ids(&state), ["1", "2", "4"]);
    }

    #[test]
    fn videos_tab_filters_in_order() {
        let mut state = State::default();
        let _ = state.update(Message::TabSelected(MediaKind::Video), &context());
        assert_eq!(ids(&state), ["3", "5"]);
    }

    #[test]
    fn empty_gallery_has_no_items_for_either_tab() {
        let mut state = State::new(Vec::new(), true);
        assert!(state.filtered_items().is_empty());
        state.set_tab(MediaKind::Video);
        assert!(state.filtered_items().is_empty());
    }

    #[test]
    fn pressing_an_item_selects_and_reports_it() {
        let mut state = State::default();
        let (event, _) = state.update(Message::ItemPressed(MediaId::new("3")), &context());
        match event {
            Event::MediaSelected(item) => assert_eq!(item.description, "Goal highlights from last match"),
            other => panic!("expected MediaSelected, got {other:?}"),
        }
        assert_eq!(state.selected().map(|i| i.author.as_str()), Some("Sarah Williams"));

        let _ = state.update(Message::CloseDetail, &context());
        assert!(state.selected().is_none());
    }

    #[test]
    fn unknown_item_is_ignored() {
        let mut state = State::default();
        let (event, _) = state.update(Message::ItemPressed(MediaId::new("99")), &context());
        assert!(matches!(event, Event::None));
        assert!(state.selected().is_none());
    }

    #[test]
    fn closing_upload_drops_a_running_upload() {
        let mut state = State::default();
        let _ = state.update(Message::OpenUpload, &context());
        let _ = state.update(
            Message::Upload(upload::Message::PickFinished(
                crate::application::port::PickOutcome::Picked("/tmp/pitch.jpg".into()),
            )),
            &context(),
        );
        let _ = state.update(
            Message::Upload(upload::Message::DescriptionChanged("Warm-up".into())),
            &context(),
        );
        let _ = state.update(Message::Upload(upload::Message::Submit), &context());
        assert!(state.upload().is_some_and(upload::State::is_uploading));

        let _ = state.update(Message::CloseUpload, &context());
        assert!(!state.is_upload_open());

        let reopened = {
            let _ = state.update(Message::OpenUpload, &context());
            state.upload().map(|form| (form.is_uploading(), form.progress(), form.selected()))
        };
        assert_eq!(reopened, Some((false, 0, None)));
    }

    #[test]
    fn upload_messages_after_close_are_ignored() {
        let mut state = State::default();
        let (event, _) = state.update(Message::Upload(upload::Message::Submit), &context());
        assert!(matches!(event, Event::None));
        assert!(!state.is_upload_open());
    }

    #[test]
    fn upload_is_unavailable_without_permission() {
        let mut state = State::new(media::sample_gallery(), false);
        let _ = state.update(Message::OpenUpload, &context());
        assert!(!state.is_upload_open());
    }

    #[test]
    fn back_exits() {
        let mut state = State::default();
        assert!(matches!(state.update(Message::Back, &context()).0, Event::Exit));
    }
}
