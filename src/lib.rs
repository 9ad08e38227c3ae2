// SPDX-License-Identifier: MPL-2.0
//! `postboard` is the notification layer of the Postboard web client.
//!
//! It provides a toast manager that owns a container on a display surface,
//! shows success/error/info/warning messages as plain text, dismisses them
//! after a per-kind delay with a short exit animation, and never fails.
//! Configuration, localized chrome strings and an async timer driver round
//! it out.

#![doc(html_root_url = "https://docs.rs/postboard/0.3.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
