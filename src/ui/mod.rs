// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! The client's pages (login, registration, feed, admin) report every outcome
//! through toasts; this module holds that notification layer.
//!
//! - [`notifications`] - Toast notification system for user feedback

pub mod notifications;
