// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Every alert the screens raise (missing media, picker failure, upload
//! success, config fallback) becomes a toast here instead of a blocking
//! dialog.
//!
//! # Components
//!
//! - [`notification`] - `Notification` struct with severity and title
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering
//!
//! # Behavior
//!
//! - Lifetime: 3s for success/info, 5s for warnings, manual dismiss for errors
//! - At most 3 toasts on screen; the rest wait in a queue
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
