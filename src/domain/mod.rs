// SPDX-License-Identifier: MPL-2.0
//! Domain layer - plain value types and rules with no UI dependencies.
//!
//! # Modules
//!
//! - [`auth`]: Sign-in/sign-up modes, form fields and validation
//!   ([`AuthMode`](auth::AuthMode), [`FieldErrors`](auth::FieldErrors))
//! - [`media`]: Gallery media ([`MediaKind`](media::MediaKind),
//!   [`MediaItem`](media::MediaItem), [`UploadedMedia`](media::UploadedMedia))
//! - [`player`]: Roster types ([`Player`](player::Player),
//!   [`RoleStats`](player::RoleStats))
//! - [`activity`]: Dashboard activity feed ([`Activity`](activity::Activity))

pub mod activity;
pub mod auth;
pub mod media;
pub mod player;
