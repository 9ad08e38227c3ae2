// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports and orchestration.
//!
//! This module contains the application layer of the crate:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`service`]: The shared toast service and its timer driver
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`ui::notifications`) is generic over the ports
//!
//! # Example
//!
//! ```ignore
//! use postboard::application::port::Surface;
//! use postboard::infrastructure::Document;
//!
//! // Infrastructure implements the port trait
//! let mut document = Document::new();
//! let body = document.body();
//! let banner = document.create_element("div");
//! document.append_child(body, banner);
//! ```

pub mod port;
pub mod service;

pub use service::ToastService;
