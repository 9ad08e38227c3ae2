// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure value objects and their validity rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`AnimationGrace`](ui::newtypes::AnimationGrace),
//!   [`DisplayDuration`](ui::newtypes::DisplayDuration))

pub mod ui;
