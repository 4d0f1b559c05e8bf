// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping platform dependencies.
//!
//! # Available Adapters
//!
//! - [`picker`]: Native file dialog via `rfd` (implements [`MediaPicker`])
//!
//! [`MediaPicker`]: crate::application::port::MediaPicker

pub mod picker;

pub use picker::RfdMediaPicker;
