// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded in the binary. The active
//! locale is picked from the `--lang` flag, then the config file, then the
//! operating system, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
