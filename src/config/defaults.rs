// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Session**: Startup authentication check
//! - **Upload**: Simulated upload timing
//! - **Club**: Club and member display defaults

// ==========================================================================
// Session Defaults
// ==========================================================================

/// Delay of the startup authentication check (in milliseconds).
pub const DEFAULT_AUTH_CHECK_DELAY_MS: u64 = 1500;

/// Minimum authentication check delay (in milliseconds).
pub const MIN_AUTH_CHECK_DELAY_MS: u64 = 0;

/// Maximum authentication check delay (in milliseconds).
pub const MAX_AUTH_CHECK_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Interval between two simulated progress ticks (in milliseconds).
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 300;

/// Minimum progress tick interval (in milliseconds).
pub const MIN_PROGRESS_INTERVAL_MS: u64 = 50;

/// Maximum progress tick interval (in milliseconds).
pub const MAX_PROGRESS_INTERVAL_MS: u64 = 5_000;

/// Percentage added to the progress counter on each tick.
pub const DEFAULT_PROGRESS_STEP: u8 = 10;

/// Minimum progress step.
pub const MIN_PROGRESS_STEP: u8 = 1;

/// Maximum progress step.
pub const MAX_PROGRESS_STEP: u8 = 100;

/// Delay after which the simulated upload completes (in milliseconds).
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 3000;

/// Minimum completion delay (in milliseconds).
pub const MIN_COMPLETION_DELAY_MS: u64 = 100;

/// Maximum completion delay (in milliseconds).
pub const MAX_COMPLETION_DELAY_MS: u64 = 60_000;

/// Upper bound of the progress counter.
pub const PROGRESS_MAX: u8 = 100;

// ==========================================================================
// Club Defaults
// ==========================================================================

/// Club name shown in the header and on the splash screen.
pub const DEFAULT_CLUB_NAME: &str = "FC Champions";

/// Team name shown on the dashboard.
pub const DEFAULT_TEAM_NAME: &str = "FC United";

/// Member display name shown on the dashboard.
pub const DEFAULT_DISPLAY_NAME: &str = "John Doe";

/// Unread notification count shown on the dashboard bell.
pub const DEFAULT_NOTIFICATION_COUNT: u32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sit_inside_their_ranges() {
        assert!((MIN_AUTH_CHECK_DELAY_MS..=MAX_AUTH_CHECK_DELAY_MS)
            .contains(&DEFAULT_AUTH_CHECK_DELAY_MS));
        assert!((MIN_PROGRESS_INTERVAL_MS..=MAX_PROGRESS_INTERVAL_MS)
            .contains(&DEFAULT_PROGRESS_INTERVAL_MS));
        assert!((MIN_PROGRESS_STEP..=MAX_PROGRESS_STEP).contains(&DEFAULT_PROGRESS_STEP));
        assert!((MIN_COMPLETION_DELAY_MS..=MAX_COMPLETION_DELAY_MS)
            .contains(&DEFAULT_COMPLETION_DELAY_MS));
    }

    #[test]
    fn default_schedule_reaches_full_progress_at_completion() {
        let ticks = u64::from(PROGRESS_MAX / DEFAULT_PROGRESS_STEP);
        assert_eq!(ticks * DEFAULT_PROGRESS_INTERVAL_MS, DEFAULT_COMPLETION_DELAY_MS);
    }
}
