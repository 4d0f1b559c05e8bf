// SPDX-License-Identifier: MPL-2.0
//! Media upload form.
//!
//! The form collects a media kind, a picked file and a description, then runs
//! a simulated upload. The running upload is an abortable task whose handle
//! lives in the form state: dropping the form cancels the upload.

pub mod simulation;
mod view;

pub use simulation::{UploadEvent, UploadId, UploadSchedule};
pub use view::{view, ViewContext};

use crate::application::port::picker::{self, MediaPicker, PickOutcome};
use crate::domain::media::{MediaKind, UploadedMedia};
use crate::ui::notifications::Notification;
use iced::task::{self, Task};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    KindSelected(MediaKind),
    DescriptionChanged(String),
    PickMedia,
    PickFinished(PickOutcome),
    ClearSelected,
    Submit,
    Simulation(UploadId, UploadEvent),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Something the user must be told about.
    Alert(Notification),
    Completed(UploadedMedia),
}

/// Collaborators the form needs while handling messages.
#[derive(Clone)]
pub struct Context {
    pub picker: Arc<dyn MediaPicker>,
    pub schedule: UploadSchedule,
}

/// A running simulated upload.
struct Running {
    id: UploadId,
    progress: u8,
    step: u8,
    /// Values captured when the upload was submitted.
    payload: UploadedMedia,
    /// Aborts the timeline stream when dropped.
    _handle: task::Handle,
}

impl fmt::Debug for Running {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Running")
            .field("id", &self.id)
            .field("progress", &self.progress)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct State {
    kind: MediaKind,
    description: String,
    selected: Option<String>,
    running: Option<Running>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.running.is_some()
    }

    /// Upload progress in percent; 0 when idle.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.running.as_ref().map_or(0, |run| run.progress)
    }

    /// Forgets the picked file. Description and kind are kept.
    pub fn clear_selected_media(&mut self) {
        self.selected = None;
    }

    /// Asks the picker for permission, then for a file of the current kind.
    pub fn pick_media(&self, picker: Arc<dyn MediaPicker>) -> Task<Message> {
        let kind = self.kind;
        Task::perform(
            async move { picker::pick_with_permission(picker.as_ref(), kind).await },
            Message::PickFinished,
        )
    }

    fn apply_pick(&mut self, outcome: PickOutcome) -> Event {
        match outcome {
            PickOutcome::Picked(uri) => {
                tracing::debug!(uri = %uri, uploading = self.is_uploading(), "media picked");
                self.selected = Some(uri);
                Event::None
            }
            PickOutcome::Cancelled => Event::None,
            PickOutcome::PermissionDenied => Event::Alert(
                Notification::warning("alert-permission-message").with_title("alert-permission-title"),
            ),
            PickOutcome::Failed(err) => {
                tracing::error!(%err, "error picking media");
                Event::Alert(
                    Notification::error("alert-pick-failed-message").with_title("alert-error-title"),
                )
            }
        }
    }

    /// Validates the form and starts the simulated upload.
    ///
    /// A rejected submit raises exactly one alert and changes nothing.
    pub fn submit(&mut self, schedule: UploadSchedule) -> (Event, Task<Message>) {
        if self.is_uploading() {
            return (Event::None, Task::none());
        }
        let Some(uri) = self.selected.clone() else {
            return (
                Event::Alert(
                    Notification::warning("alert-missing-media-message")
                        .with_title("alert-missing-media-title"),
                ),
                Task::none(),
            );
        };
        if self.description.trim().is_empty() {
            return (
                Event::Alert(
                    Notification::warning("alert-missing-description-message")
                        .with_title("alert-missing-description-title"),
                ),
                Task::none(),
            );
        }

        let id = UploadId::next();
        let payload = UploadedMedia {
            kind: self.kind,
            uri,
            description: self.description.clone(),
        };
        tracing::info!(?id, kind = %payload.kind, uri = %payload.uri, "upload started");

        let (task, handle) = Task::stream(simulation::run(id, schedule))
            .map(|(id, event)| Message::Simulation(id, event))
            .abortable();
        self.running = Some(Running {
            id,
            progress: 0,
            step: schedule.step,
            payload,
            _handle: handle.abort_on_drop(),
        });

        (Event::None, task)
    }

    fn apply_simulation(&mut self, id: UploadId, event: UploadEvent) -> Event {
        let Some(run) = self.running.as_mut().filter(|run| run.id == id) else {
            tracing::debug!(?id, ?event, "ignoring event from a stale upload");
            return Event::None;
        };

        match event {
            UploadEvent::Tick => {
                run.progress = simulation::advance(run.progress, run.step);
                Event::None
            }
            UploadEvent::Complete => {
                let Some(finished) = self.running.take() else {
                    return Event::None;
                };
                tracing::info!(id = ?finished.id, "upload finished");
                self.selected = None;
                self.description.clear();
                Event::Completed(finished.payload)
            }
        }
    }

    pub fn update(&mut self, message: Message, ctx: &Context) -> (Event, Task<Message>) {
        match message {
            Message::KindSelected(kind) => {
                self.kind = kind;
                (Event::None, Task::none())
            }
            Message::DescriptionChanged(text) => {
                self.description = text;
                (Event::None, Task::none())
            }
            Message::PickMedia => (Event::None, self.pick_media(Arc::clone(&ctx.picker))),
            Message::PickFinished(outcome) => (self.apply_pick(outcome), Task::none()),
            Message::ClearSelected => {
                self.clear_selected_media();
                (Event::None, Task::none())
            }
            Message::Submit => self.submit(ctx.schedule),
            Message::Simulation(id, event) => (self.apply_simulation(id, event), Task::none()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::picker::fake::FakePicker;
    use crate::application::port::PickerError;
    use crate::ui::notifications::Severity;

    fn context() -> Context {
        Context {
            picker: Arc::new(FakePicker::picking("/tmp/kickoff.jpg")),
            schedule: UploadSchedule::default(),
        }
    }

    fn alert_title(event: &Event) -> Option<&str> {
        match event {
            Event::Alert(n) => n.title_key(),
            _ => None,
        }
    }

    fn ready_form() -> State {
        let mut state = State::new();
        let _ = state.apply_pick(PickOutcome::Picked("/tmp/kickoff.jpg".into()));
        state.description = "Kick-off".into();
        state
    }

    fn current_id(state: &State) -> UploadId {
        state.running.as_ref().map(|run| run.id).unwrap()
    }

    #[test]
    fn submit_without_media_alerts_once_and_changes_nothing() {
        let mut state = State::new();
        state.description = "Derby day".into();
        let (event, _) = state.update(Message::Submit, &context());
        assert_eq!(alert_title(&event), Some("alert-missing-media-title"));
        assert!(!state.is_uploading());
        assert_eq!(state.description(), "Derby day");
    }

    #[test]
    fn submit_with_blank_description_alerts() {
        let mut state = ready_form();
        state.description = "   ".into();
        let (event, _) = state.update(Message::Submit, &context());
        assert_eq!(alert_title(&event), Some("alert-missing-description-title"));
        assert!(!state.is_uploading());
        assert_eq!(state.selected(), Some("/tmp/kickoff.jpg"));
    }

    #[test]
    fn valid_submit_starts_uploading_at_zero() {
        let mut state = ready_form();
        let (event, _) = state.update(Message::Submit, &context());
        assert!(matches!(event, Event::None));
        assert!(state.is_uploading());
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn ticks_advance_progress_and_cap_at_one_hundred() {
        let mut state = ready_form();
        let _ = state.update(Message::Submit, &context());
        let id = current_id(&state);

        for _ in 0..12 {
            let _ = state.update(Message::Simulation(id, UploadEvent::Tick), &context());
        }
        assert_eq!(state.progress(), 100);
    }

    #[test]
    fn completion_emits_submitted_values_and_resets_form() {
        let mut state = ready_form();
        state.kind = MediaKind::Video;
        let _ = state.update(Message::Submit, &context());
        let id = current_id(&state);

        // Edits during the upload do not change what was submitted.
        let _ = state.update(Message::DescriptionChanged("edited".into()), &context());

        let (event, _) = state.update(Message::Simulation(id, UploadEvent::Complete), &context());
        match event {
            Event::Completed(media) => {
                assert_eq!(media.kind, MediaKind::Video);
                assert_eq!(media.uri, "/tmp/kickoff.jpg");
                assert_eq!(media.description, "Kick-off");
            }
            other => panic!("expected Completed, got {other:?}"),
        }
        assert!(!state.is_uploading());
        assert_eq!(state.progress(), 0);
        assert_eq!(state.selected(), None);
        assert_eq!(state.description(), "");
    }

    #[test]
    fn stale_upload_events_are_ignored() {
        let mut state = ready_form();
        let stale = UploadId::next();
        let _ = state.update(Message::Submit, &context());

        let (event, _) = state.update(Message::Simulation(stale, UploadEvent::Complete), &context());
        assert!(matches!(event, Event::None));
        assert!(state.is_uploading());

        let _ = state.update(Message::Simulation(stale, UploadEvent::Tick), &context());
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn submit_while_uploading_is_ignored() {
        let mut state = ready_form();
        let _ = state.update(Message::Submit, &context());
        let first = current_id(&state);
        let _ = state.update(Message::Submit, &context());
        assert_eq!(current_id(&state), first);
    }

    #[test]
    fn picking_during_upload_replaces_selection() {
        let mut state = ready_form();
        let _ = state.update(Message::Submit, &context());
        let _ = state.update(
            Message::PickFinished(PickOutcome::Picked("/tmp/other.mp4".into())),
            &context(),
        );
        assert!(state.is_uploading());
        assert_eq!(state.selected(), Some("/tmp/other.mp4"));
    }

    #[test]
    fn cancelled_pick_keeps_previous_selection() {
        let mut state = ready_form();
        let (event, _) = state.update(Message::PickFinished(PickOutcome::Cancelled), &context());
        assert!(matches!(event, Event::None));
        assert_eq!(state.selected(), Some("/tmp/kickoff.jpg"));
    }

    #[test]
    fn denied_permission_and_failures_raise_alerts() {
        let mut state = State::new();
        let (denied, _) =
            state.update(Message::PickFinished(PickOutcome::PermissionDenied), &context());
        assert_eq!(alert_title(&denied), Some("alert-permission-title"));

        let (failed, _) = state.update(
            Message::PickFinished(PickOutcome::Failed(PickerError::Unavailable("x".into()))),
            &context(),
        );
        match failed {
            Event::Alert(n) => {
                assert_eq!(n.severity(), Severity::Error);
                assert_eq!(n.message_key(), "alert-pick-failed-message");
            }
            other => panic!("expected alert, got {other:?}"),
        }
    }

    #[test]
    fn clear_selected_only_resets_selection() {
        let mut state = ready_form();
        state.kind = MediaKind::Video;
        let _ = state.update(Message::ClearSelected, &context());
        assert_eq!(state.selected(), None);
        assert_eq!(state.description(), "Kick-off");
        assert_eq!(state.kind(), MediaKind::Video);
    }
}
