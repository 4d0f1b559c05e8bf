// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the UI depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer talks to ports, never to adapters directly

pub mod port;
