// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! owns its state, turns messages into events, and leaves cross-screen
//! decisions to the application shell.
//!
//! # Screens
//!
//! - [`splash`] - Club logo and spinner shown during the session check
//! - [`auth`] - Login and sign-up form with inline validation
//! - [`dashboard`] - Team header, navigation tiles and activity feed
//! - [`gallery`] - Club photos and videos, with detail and upload modals
//! - [`upload`] - Media upload form and its simulated upload
//! - [`roster`] - Searchable player list and player profiles
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable pieces (media tiles, avatars, screen header)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod auth;
pub mod components;
pub mod dashboard;
pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod roster;
pub mod splash;
pub mod styles;
pub mod theming;
pub mod upload;
pub mod widgets;
