// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains UI-related value objects that are independent
//! of any display surface.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{AnimationGrace, DisplayDuration};
