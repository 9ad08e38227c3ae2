// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for toast chrome.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Only the strings the crate itself renders are translated (close button label,
//! accessible kind labels); toast messages arrive already localized from callers.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - Fallback to default locale when translations are missing

pub mod fluent;
