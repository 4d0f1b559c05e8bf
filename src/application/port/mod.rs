// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits. The traits only use domain
//! types, so UI components can be driven by fakes in tests.
//!
//! # Available Ports
//!
//! - [`picker`]: Media-library permission and photo/video selection

pub mod picker;

pub use picker::{MediaPicker, PermissionStatus, PickOutcome, PickerError};
