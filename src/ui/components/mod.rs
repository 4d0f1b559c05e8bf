// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! - [`media_tile`] - Photo/video tiles with placeholder rendering, and
//!   initials avatars
//! - [`screen_header`] - Title bar with a back button used by the gallery and
//!   roster

pub mod media_tile;
pub mod screen_header;
