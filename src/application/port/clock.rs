// SPDX-License-Identifier: MPL-2.0
//! Clock port definition.

use tokio::time::Instant;

/// Source of the current instant for scheduling toast deadlines.
pub trait Clock {
    /// Returns the current monotonic instant.
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
