// SPDX-License-Identifier: MPL-2.0
//! Simulated upload timeline.
//!
//! An upload run is a single stream of [`UploadEvent`]s: periodic progress
//! ticks followed by one completion. The event times are a pure function of
//! the [`UploadSchedule`], so they can be checked without a clock; the stream
//! only adds the sleeping.

use crate::config::UploadConfig;
use futures_util::stream::{self, Stream};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;

/// Identifies one upload run so late events from a cancelled run are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadId(u64);

impl UploadId {
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadEvent {
    /// Advance progress by one step.
    Tick,
    /// The upload finished.
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadSchedule {
    pub tick_interval: Duration,
    /// Percentage points added per tick.
    pub step: u8,
    pub completion_delay: Duration,
}

impl Default for UploadSchedule {
    fn default() -> Self {
        Self::from_config(&UploadConfig::default())
    }
}

impl UploadSchedule {
    #[must_use]
    pub fn from_config(config: &UploadConfig) -> Self {
        Self {
            tick_interval: config.progress_interval(),
            step: config.progress_step(),
            completion_delay: config.completion_delay(),
        }
    }

    /// Number of ticks needed to reach 100%.
    #[must_use]
    pub fn ticks_to_full(&self) -> u32 {
        u32::from(100u8.div_ceil(self.step.max(1)))
    }

    /// Offsets from the start of the run at which each event fires.
    ///
    /// Ticks fire every `tick_interval` until progress would reach 100 or the
    /// completion deadline passes. A tick due at the same instant as
    /// completion comes first.
    #[must_use]
    pub fn timeline(&self) -> Vec<(Duration, UploadEvent)> {
        let mut events = Vec::new();
        if !self.tick_interval.is_zero() {
            for k in 1..=self.ticks_to_full() {
                let at = self.tick_interval * k;
                if at > self.completion_delay {
                    break;
                }
                events.push((at, UploadEvent::Tick));
            }
        }
        events.push((self.completion_delay, UploadEvent::Complete));
        events
    }
}

/// Progress after applying one tick of `step` to `progress`, capped at 100.
#[must_use]
pub fn advance(progress: u8, step: u8) -> u8 {
    progress.saturating_add(step).min(100)
}

/// Emits the schedule's events in real time, tagged with `id`.
///
/// The clock starts when the stream is first polled.
pub fn run(id: UploadId, schedule: UploadSchedule) -> impl Stream<Item = (UploadId, UploadEvent)> {
    let events = schedule.timeline().into_iter();
    stream::unfold(
        (None::<Instant>, events),
        move |(start, mut events)| async move {
            let (at, event) = events.next()?;
            let start = start.unwrap_or_else(Instant::now);
            tokio::time::sleep_until(start + at).await;
            Some(((id, event), (Some(start), events)))
        },
    )
}
