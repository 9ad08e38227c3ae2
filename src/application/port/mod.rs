// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! The toast manager only talks to these traits, so it can drive a real page,
//! an in-memory document or a test double alike.
//!
//! # Available Ports
//!
//! - [`surface`]: Display tree the toast container lives in
//! - [`clock`]: Monotonic time source for auto-dismiss deadlines
//!
//! # Design Notes
//!
//! - Surface methods are infallible: a stale handle is ignored, never an error
//! - Time is `tokio::time::Instant` so paused-runtime tests control it
//! - No `async fn` - the service layer owns all waiting

pub mod clock;
pub mod surface;

// Re-export main types for convenience
pub use clock::Clock;
pub use surface::{NodeId, Surface};
