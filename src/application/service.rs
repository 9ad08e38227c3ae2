// SPDX-License-Identifier: MPL-2.0
//! Shared toast service and its timer driver.
//!
//! [`ToastService`] is the handle the rest of the client holds: clone it into
//! every page controller instead of reaching for a global. Each call locks
//! the manager, mutates it synchronously, and wakes the driver task so it can
//! re-arm its timer. The lock is never held across an `.await`.

use crate::application::port::{Clock, Surface};
use crate::infrastructure::{Document, SystemClock};
use crate::ui::notifications::{Expiry, Kind, Manager, ToastId};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Cloneable handle over a shared toast [`Manager`].
pub struct ToastService<S = Document, C = SystemClock> {
    manager: Arc<Mutex<Manager<S, C>>>,
    wake: Arc<Notify>,
}

impl<S, C> Clone for ToastService<S, C> {
    fn clone(&self) -> Self {
        Self {
            manager: Arc::clone(&self.manager),
            wake: Arc::clone(&self.wake),
        }
    }
}

impl<S: Surface, C: Clock> ToastService<S, C> {
    #[must_use]
    pub fn new(manager: Manager<S, C>) -> Self {
        Self {
            manager: Arc::new(Mutex::new(manager)),
            wake: Arc::new(Notify::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Manager<S, C>> {
        // Manager calls never panic midway, so a poisoned state is still consistent
        self.manager.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut Manager<S, C>) -> R) -> R {
        let result = f(&mut self.lock());
        self.wake.notify_one();
        result
    }

    pub fn show(
        &self,
        message: impl Into<String>,
        kind: impl Into<Kind>,
        expiry: impl Into<Expiry>,
    ) -> ToastId {
        self.mutate(|manager| manager.show(message, kind, expiry))
    }

    pub fn show_default(&self, message: impl Into<String>) -> ToastId {
        self.mutate(|manager| manager.show_default(message))
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.mutate(|manager| manager.success(message))
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.mutate(|manager| manager.error(message))
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.mutate(|manager| manager.info(message))
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.mutate(|manager| manager.warning(message))
    }

    /// Starts removal of a toast; unknown ids are ignored.
    pub fn remove(&self, id: &ToastId) -> bool {
        self.mutate(|manager| manager.remove(id))
    }

    pub fn clear(&self) -> usize {
        self.mutate(Manager::clear)
    }

    /// Fires due deadlines immediately, without waiting for the driver.
    pub fn tick(&self) -> usize {
        self.lock().tick()
    }

    /// Runs `f` with read access to the manager.
    pub fn with<R>(&self, f: impl FnOnce(&Manager<S, C>) -> R) -> R {
        f(&self.lock())
    }

    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.lock().contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Fires due deadlines, then sleeps until the next one or until a call
    /// on any clone of this service changes the schedule. Never returns.
    pub async fn run(self) {
        loop {
            let next = {
                let mut manager = self.lock();
                manager.tick();
                manager.next_deadline()
            };
            match next {
                Some(deadline) => {
                    tokio::select! {
                        () = tokio::time::sleep_until(deadline) => {}
                        () = self.wake.notified() => {}
                    }
                }
                None => self.wake.notified().await,
            }
        }
    }
}

impl<S, C> ToastService<S, C>
where
    S: Surface + Send + 'static,
    C: Clock + Send + 'static,
{
    /// Spawns [`ToastService::run`] on the current tokio runtime.
    pub fn spawn_driver(&self) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            tracing::debug!("toast driver started");
            service.run().await;
        })
    }
}

impl<C: Clock> ToastService<Document, C> {
    /// Serializes the toast container as HTML.
    #[must_use]
    pub fn snapshot_html(&self) -> String {
        self.with(|manager| manager.surface().outer_html(manager.container()))
    }
}
