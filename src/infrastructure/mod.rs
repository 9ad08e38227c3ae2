// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`dom`]: In-memory document tree (implements [`Surface`])
//! - [`clock`]: System and manual clocks (implement [`Clock`])
//!
//! [`Surface`]: crate::application::port::Surface
//! [`Clock`]: crate::application::port::Clock

pub mod clock;
pub mod dom;

// Re-export main types for convenience
pub use clock::{ManualClock, SystemClock};
pub use dom::{escape_html, Document};
