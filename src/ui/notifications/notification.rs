// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` registry entry, its `ToastId`,
//! the `Kind` enum and the `Expiry` policy used throughout the notification
//! system.

use crate::application::port::NodeId;
use crate::domain::ui::DisplayDuration;
use rand::Rng;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Prefix shared by every toast id.
pub const ID_PREFIX: &str = "toast-";

const SUFFIX_LEN: usize = 9;
const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Unique identifier for a notification.
///
/// Rendered as `toast-<unix millis>-<9 base-36 characters>`; the random
/// suffix keeps ids distinct when several toasts are raised within the same
/// millisecond.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    /// Generates a fresh id from the wall clock and a random suffix.
    #[must_use]
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| char::from(SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())]))
            .collect();
        Self(format!("{ID_PREFIX}{millis}-{suffix}"))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ToastId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Semantic category of a toast; determines icon and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Operation completed successfully.
    Success,
    /// Operation failed.
    Error,
    /// Neutral information. Also the fallback for unknown kind names.
    #[default]
    Info,
    /// Something needs attention but nothing failed.
    Warning,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Info, Kind::Warning];

    /// Parses a kind name. Unknown names fall back to [`Kind::Info`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Kind::Success,
            "error" => Kind::Error,
            "warning" => Kind::Warning,
            _ => Kind::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Info => "info",
            Kind::Warning => "warning",
        }
    }

    /// Returns the glyph shown in the toast's icon slot.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Error => "✕",
            Kind::Info => "ℹ",
            Kind::Warning => "⚠",
        }
    }

    /// Returns the CSS class selecting this kind's styling.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Kind::Success => "toast-success",
            Kind::Error => "toast-error",
            Kind::Info => "toast-info",
            Kind::Warning => "toast-warning",
        }
    }

    /// Returns the ARIA role: errors and warnings interrupt screen readers.
    #[must_use]
    pub fn aria_role(self) -> &'static str {
        match self {
            Kind::Error | Kind::Warning => "alert",
            Kind::Success | Kind::Info => "status",
        }
    }

    /// Returns the i18n key of the accessible label for this kind.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Kind::Success => "toast-kind-success",
            Kind::Error => "toast-kind-error",
            Kind::Info => "toast-kind-info",
            Kind::Warning => "toast-kind-warning",
        }
    }
}

impl From<&str> for Kind {
    fn from(name: &str) -> Self {
        Kind::parse(name)
    }
}

impl From<&String> for Kind {
    fn from(name: &String) -> Self {
        Kind::parse(name)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a toast dismisses itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Auto-dismiss once the duration has elapsed.
    After(Duration),
    /// Stay until closed explicitly.
    Persistent,
}

impl Expiry {
    /// Converts a signed millisecond count; zero or below is persistent.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        match u64::try_from(millis) {
            Ok(ms) if ms > 0 => Expiry::After(Duration::from_millis(ms)),
            _ => Expiry::Persistent,
        }
    }

    /// Returns the auto-dismiss delay, or `None` when persistent.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Expiry::After(duration) => Some(duration),
            Expiry::Persistent => None,
        }
    }

    #[must_use]
    pub fn is_persistent(self) -> bool {
        matches!(self, Expiry::Persistent)
    }
}

impl From<Duration> for Expiry {
    fn from(duration: Duration) -> Self {
        if duration.is_zero() {
            Expiry::Persistent
        } else {
            Expiry::After(duration)
        }
    }
}

impl From<DisplayDuration> for Expiry {
    fn from(duration: DisplayDuration) -> Self {
        duration
            .as_duration()
            .map_or(Expiry::Persistent, Expiry::After)
    }
}

/// Lifecycle phase of a registered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// On screen, possibly waiting for its auto-dismiss deadline.
    Visible,
    /// Marked with the exit animation class, waiting to be detached.
    Hiding,
}

/// A toast registered with the manager.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: ToastId,
    /// Kind (determines icon and styling).
    kind: Kind,
    /// Plain text message, never interpreted as markup.
    message: String,
    /// Root element of the toast on the display surface.
    element: NodeId,
    /// Current lifecycle phase.
    phase: Phase,
    /// When this notification was shown.
    created_at: Instant,
    /// Auto-dismiss policy chosen at creation.
    expiry: Expiry,
    /// Stacking position assigned by the manager.
    sequence: u64,
}

impl Notification {
    pub(crate) fn new(
        id: ToastId,
        kind: Kind,
        message: String,
        element: NodeId,
        created_at: Instant,
        expiry: Expiry,
        sequence: u64,
    ) -> Self {
        Self {
            id,
            kind,
            message,
            element,
            phase: Phase::Visible,
            created_at,
            expiry,
            sequence,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn element(&self) -> NodeId {
        self.element
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn expiry(&self) -> Expiry {
        self.expiry
    }

    #[must_use]
    pub fn is_hiding(&self) -> bool {
        self.phase == Phase::Hiding
    }

    pub(crate) fn sequence(&self) -> u64 {
        self.sequence
    }

    pub(crate) fn begin_hiding(&mut self) {
        self.phase = Phase::Hiding;
    }
}
