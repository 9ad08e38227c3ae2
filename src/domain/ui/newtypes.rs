// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for toast timing values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Animation Bounds
// =============================================================================

/// Exit animation grace period bounds (0ms to 2000ms).
pub mod animation_bounds {
    /// Minimum grace in milliseconds (no animation).
    pub const MIN_MS: u64 = 0;
    /// Maximum grace in milliseconds.
    pub const MAX_MS: u64 = 2_000;
    /// Default grace in milliseconds.
    pub const DEFAULT_MS: u64 = 300;
}

// =============================================================================
// Display Bounds
// =============================================================================

/// Toast display duration bounds.
pub mod display_bounds {
    /// Longest auto-dismiss delay a configured duration may ask for (10 minutes).
    pub const MAX_MS: i64 = 600_000;
}

// =============================================================================
// AnimationGrace
// =============================================================================

/// Time between marking a toast as hiding and detaching it from the container.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0–2000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationGrace(u64);

impl AnimationGrace {
    /// Creates a new grace period, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(animation_bounds::MIN_MS, animation_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the grace period as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if toasts are detached without any exit animation.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == animation_bounds::MIN_MS
    }
}

impl Default for AnimationGrace {
    fn default() -> Self {
        Self(animation_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// Configured display time of a toast, in milliseconds.
///
/// Zero means the toast stays until it is closed explicitly. Negative
/// values collapse to zero and positive values are capped at
/// [`display_bounds::MAX_MS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayDuration(i64);

impl DisplayDuration {
    /// Persistent display (no auto-dismiss).
    pub const PERSISTENT: Self = Self(0);

    /// Creates a display duration, clamping to valid range.
    #[must_use]
    pub fn new(millis: i64) -> Self {
        Self(millis.clamp(0, display_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }

    /// Returns true if this duration never auto-dismisses.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        self.0 == 0
    }

    /// Returns the auto-dismiss delay, or `None` when persistent.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        u64::try_from(self.0)
            .ok()
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}
