// SPDX-License-Identifier: MPL-2.0
//! `club_hub` is a football club community app built with the Iced GUI framework.
//!
//! Members sign in, browse the player roster, look through the club's photos
//! and videos, and upload new ones. All club data is local sample data.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
