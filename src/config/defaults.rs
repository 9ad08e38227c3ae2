// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Container**: Identity of the element hosting all toasts
//! - **Durations**: Per-kind auto-dismiss delays
//! - **Animation**: Exit animation grace period

// ==========================================================================
// Container Defaults
// ==========================================================================

/// Element id of the toast container on the display surface.
pub const DEFAULT_CONTAINER_ID: &str = "toast-container";

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Display time used by a plain `show` call (in milliseconds).
pub const DEFAULT_SHOW_DURATION_MS: i64 = 5_000;

/// Display time of success toasts (in milliseconds).
pub const DEFAULT_SUCCESS_DURATION_MS: i64 = 4_000;

/// Display time of info toasts (in milliseconds).
pub const DEFAULT_INFO_DURATION_MS: i64 = 4_000;

/// Display time of warning toasts (in milliseconds).
pub const DEFAULT_WARNING_DURATION_MS: i64 = 5_000;

/// Display time of error toasts (in milliseconds).
/// Errors stay longer since they usually need to be read in full.
pub const DEFAULT_ERROR_DURATION_MS: i64 = 6_000;

/// Longest configurable display time (in milliseconds).
pub const MAX_TOAST_DURATION_MS: i64 = 600_000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default exit animation grace (in milliseconds).
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 300;

/// Minimum exit animation grace (in milliseconds).
pub const MIN_EXIT_ANIMATION_MS: u64 = 0;

/// Maximum exit animation grace (in milliseconds).
pub const MAX_EXIT_ANIMATION_MS: u64 = 2_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Durations validation
    assert!(DEFAULT_SHOW_DURATION_MS > 0);
    assert!(DEFAULT_SUCCESS_DURATION_MS > 0);
    assert!(DEFAULT_INFO_DURATION_MS > 0);
    assert!(DEFAULT_WARNING_DURATION_MS >= DEFAULT_SUCCESS_DURATION_MS);
    assert!(DEFAULT_ERROR_DURATION_MS >= DEFAULT_WARNING_DURATION_MS);
    assert!(MAX_TOAST_DURATION_MS >= DEFAULT_ERROR_DURATION_MS);

    // Animation validation
    assert!(MAX_EXIT_ANIMATION_MS >= MIN_EXIT_ANIMATION_MS);
    assert!(DEFAULT_EXIT_ANIMATION_MS >= MIN_EXIT_ANIMATION_MS);
    assert!(DEFAULT_EXIT_ANIMATION_MS <= MAX_EXIT_ANIMATION_MS);
};
