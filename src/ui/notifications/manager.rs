// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` limits how many toasts are on screen, queues the rest, and
//! expires them on ticks.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of auto-dismiss timers.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, or queues it when `MAX_VISIBLE` are already up.
    ///
    /// Warnings and errors are also written to the log.
    pub fn push(&mut self, notification: Notification) {
        let title = notification.title_key().unwrap_or("-");
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(title, key = notification.message_key(), "alert shown");
            }
            Severity::Error => {
                tracing::error!(title, key = notification.message_key(), "alert shown");
            }
            Severity::Success | Severity::Info => {
                tracing::debug!(title, key = notification.message_key(), "alert shown");
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification whose lifetime has elapsed.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Returns `true` while a visible toast is waiting to expire.
    ///
    /// Queued toasts only surface through a dismissal, so they never need
    /// the timer on their own.
    #[must_use]
    pub fn has_expiring(&self) -> bool {
        self.visible.iter().any(|n| n.lifetime().is_some())
    }

    /// Most recently shown notification, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.visible.front()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
        assert!(manager.latest().is_none());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::success("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn latest_is_the_newest_visible() {
        let mut manager = Manager::new();
        manager.push(Notification::info("first"));
        manager.push(Notification::info("second"));
        assert_eq!(manager.latest().map(Notification::message_key), Some("second"));
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::success("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        manager.push(Notification::success("queued"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::success("temp").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn tick_dismisses_expired_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::success("done").auto_dismiss(Duration::ZERO));
        manager.push(Notification::error("alert-pick-failed-message"));

        manager.handle_message(&Message::Tick);

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(
            manager.latest().map(Notification::message_key),
            Some("alert-pick-failed-message")
        );
    }

    #[test]
    fn only_timed_toasts_count_as_expiring() {
        let mut manager = Manager::new();
        assert!(!manager.has_expiring());

        manager.push(Notification::error("alert-pick-failed-message"));
        assert!(manager.has_notifications());
        assert!(!manager.has_expiring());

        manager.push(Notification::warning("alert-permission-message"));
        assert!(manager.has_expiring());

        let sticky = Notification::info("pinned");
        manager.push(sticky.auto_dismiss(Duration::from_secs(1)));
        assert!(manager.has_expiring());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }
        manager.clear();
        assert!(!manager.has_notifications());
    }
}
