// SPDX-License-Identifier: MPL-2.0
//! Periodic tick subscription.
//!
//! The tick drives the spinner and toast expiry. It only runs while a spinner
//! is on screen or a toast is counting down; toasts that wait for the user do
//! not keep it alive.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Spinner frame interval; also fine-grained enough for toast expiry.
const TICK_INTERVAL: Duration = Duration::from_millis(80);

pub fn create_tick_subscription(animating: bool, has_expiring_toasts: bool) -> Subscription<Message> {
    if needs_tick(animating, has_expiring_toasts) {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn needs_tick(animating: bool, has_expiring_toasts: bool) -> bool {
    animating || has_expiring_toasts
}
