// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides the non-blocking notification layer of the client.
//! Login, registration, feed and admin flows raise toasts here instead of
//! blocking alerts; toasts dismiss themselves after a per-kind delay or when
//! their close button is pressed.
//!
//! # Components
//!
//! - [`notification`] - `Notification` entry, `ToastId`, `Kind` and `Expiry`
//! - [`manager`] - `Manager` owning the container and the registry
//! - [`toast`] - Element construction for a single toast
//! - [`schedule`] - Cancellable deadlines keyed by toast id
//!
//! # Usage
//!
//! ```
//! use postboard::config::ToastSettings;
//! use postboard::infrastructure::{Document, SystemClock};
//! use postboard::ui::notifications::{Manager, ToastLabels};
//!
//! let mut manager = Manager::new(
//!     Document::new(),
//!     SystemClock,
//!     ToastSettings::default(),
//!     ToastLabels::default(),
//! );
//!
//! let id = manager.error("Upload failed");
//! assert!(manager.contains(&id));
//!
//! // Close button pressed
//! manager.remove(&id);
//! ```
//!
//! # Design Considerations
//!
//! - Durations: 4s for success/info, 5s for warnings, 6s for errors
//! - Removal is two-phase: `hiding` class first, detach after the exit animation
//! - Messages are text nodes, never markup
//! - Accessibility: errors and warnings use `role="alert"`, others `role="status"`

mod manager;
mod notification;
mod schedule;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Expiry, Kind, Notification, Phase, ToastId, ID_PREFIX};
pub use schedule::Schedule;
pub use toast::{
    Toast, ToastLabels, CLOSE_CLASS, CONTAINER_CLASS, CONTENT_CLASS, DISMISS_ATTRIBUTE,
    HIDING_CLASS, ICON_CLASS, MESSAGE_CLASS, TOAST_CLASS,
};
