// SPDX-License-Identifier: MPL-2.0
//! Clock adapters.
//!
//! [`SystemClock`] reads `tokio::time::Instant::now()`, which follows the
//! runtime's paused clock in tests. [`ManualClock`] only moves when told to.

use crate::application::port::Clock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Wall-clock-backed monotonic time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Upper bound on how far a [`ManualClock`] can be advanced (about 100 years).
pub const MANUAL_CLOCK_MAX_ELAPSED: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// A clock advanced explicitly, with millisecond resolution.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the manager. Advancing saturates at
/// [`MANUAL_CLOCK_MAX_ELAPSED`].
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed_ms: Arc<AtomicU64>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Moves time forward by `by` (sub-millisecond parts are dropped).
    pub fn advance(&self, by: Duration) {
        let limit = max_elapsed_ms();
        let millis = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        let _ = self
            .elapsed_ms
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(millis).min(limit))
            });
    }

    /// Moves time forward by `millis` milliseconds.
    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Returns how far the clock has been advanced since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.load(Ordering::SeqCst))
    }
}

fn max_elapsed_ms() -> u64 {
    u64::try_from(MANUAL_CLOCK_MAX_ELAPSED.as_millis()).unwrap_or(u64::MAX)
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        // Bounded by MANUAL_CLOCK_MAX_ELAPSED
        self.origin + self.elapsed()
    }
}
