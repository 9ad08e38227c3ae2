// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the toast container on a display surface and the
//! registry of live toasts. It handles display, auto-dismiss deadlines and
//! the two-phase removal (exit animation, then detach).

use super::notification::{Expiry, Kind, Notification, Phase, ToastId};
use super::schedule::Schedule;
use super::toast::{Toast, ToastLabels, CONTAINER_CLASS, DISMISS_ATTRIBUTE, HIDING_CLASS};
use crate::application::port::{Clock, NodeId, Surface};
use crate::config::ToastSettings;
use std::collections::{BTreeMap, HashMap};
use tokio::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID (close button).
    Dismiss(ToastId),
    /// Fire every deadline that is due.
    Tick,
}

/// Deferred work pending for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    /// Auto-dismiss deadline reached: start the exit animation.
    Expire,
    /// Exit animation over: detach and forget the toast.
    Purge,
}

/// Manages the toast container and its registry.
///
/// Every registered id has exactly one element in the container and every
/// toast element the manager appended has a registry entry, until the
/// purge removes both together.
#[derive(Debug)]
pub struct Manager<S, C> {
    surface: S,
    clock: C,
    container: NodeId,
    settings: ToastSettings,
    labels: ToastLabels,
    /// Registered toasts by id.
    entries: HashMap<ToastId, Notification>,
    /// Registered ids keyed by stacking sequence (oldest first).
    order: BTreeMap<u64, ToastId>,
    next_sequence: u64,
    schedule: Schedule<ToastId, Task>,
}

impl<S: Surface, C: Clock> Manager<S, C> {
    /// Creates a manager, reusing the container element if the surface
    /// already has one with the configured id.
    pub fn new(mut surface: S, clock: C, settings: ToastSettings, labels: ToastLabels) -> Self {
        let container = attach_container(&mut surface, settings.container_id());
        Self {
            surface,
            clock,
            container,
            settings,
            labels,
            entries: HashMap::new(),
            order: BTreeMap::new(),
            next_sequence: 0,
            schedule: Schedule::new(),
        }
    }

    /// Shows a toast and returns its id.
    ///
    /// Never fails: unknown kind names render as [`Kind::Info`] and the
    /// message is inserted as plain text.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: impl Into<Kind>,
        expiry: impl Into<Expiry>,
    ) -> ToastId {
        let message = message.into();
        let kind = kind.into();
        let expiry = expiry.into();
        let id = self.fresh_id();

        let element = Toast::render(&mut self.surface, &id, kind, &message, &self.labels);
        self.surface.append_child(self.container, element);

        let now = self.clock.now();
        if let Some(deadline) = expiry.duration().and_then(|after| now.checked_add(after)) {
            self.schedule.schedule(id.clone(), deadline, Task::Expire);
        }

        tracing::debug!(toast = %id, %kind, ?expiry, "toast shown");
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.insert(
            id.clone(),
            Notification::new(id.clone(), kind, message, element, now, expiry, sequence),
        );
        self.order.insert(sequence, id.clone());
        id
    }

    /// Shows an info toast with the default display time.
    pub fn show_default(&mut self, message: impl Into<String>) -> ToastId {
        let expiry = self.settings.default_duration();
        self.show(message, Kind::Info, expiry)
    }

    /// Shows a success toast with the configured success display time.
    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        let expiry = self.settings.success_duration();
        self.success_for(message, expiry)
    }

    /// Shows an error toast with the configured error display time.
    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        let expiry = self.settings.error_duration();
        self.error_for(message, expiry)
    }

    /// Shows an info toast with the configured info display time.
    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        let expiry = self.settings.info_duration();
        self.info_for(message, expiry)
    }

    /// Shows a warning toast with the configured warning display time.
    pub fn warning(&mut self, message: impl Into<String>) -> ToastId {
        let expiry = self.settings.warning_duration();
        self.warning_for(message, expiry)
    }

    /// Shows a success toast with an explicit expiry.
    pub fn success_for(&mut self, message: impl Into<String>, expiry: impl Into<Expiry>) -> ToastId {
        self.show(message, Kind::Success, expiry)
    }

    /// Shows an error toast and records the message at error level.
    pub fn error_for(&mut self, message: impl Into<String>, expiry: impl Into<Expiry>) -> ToastId {
        let message = message.into();
        tracing::error!(text = %message, "error toast");
        self.show(message, Kind::Error, expiry)
    }

    /// Shows an info toast with an explicit expiry.
    pub fn info_for(&mut self, message: impl Into<String>, expiry: impl Into<Expiry>) -> ToastId {
        self.show(message, Kind::Info, expiry)
    }

    /// Shows a warning toast and records the message at warn level.
    pub fn warning_for(&mut self, message: impl Into<String>, expiry: impl Into<Expiry>) -> ToastId {
        let message = message.into();
        tracing::warn!(text = %message, "warning toast");
        self.show(message, Kind::Warning, expiry)
    }

    /// Starts the two-phase removal of a toast.
    ///
    /// Idempotent: unknown ids and toasts already hiding are left alone.
    /// Returns `true` if this call started the removal.
    pub fn remove(&mut self, id: &ToastId) -> bool {
        let Some(entry) = self.entries.get_mut(id) else {
            tracing::trace!(toast = %id, "remove ignored, unknown toast");
            return false;
        };
        if entry.phase() == Phase::Hiding {
            return false;
        }
        entry.begin_hiding();
        let element = entry.element();
        self.surface.add_class(element, HIDING_CLASS);

        let grace = self.settings.exit_animation().as_duration();
        let now = self.clock.now();
        let purge_at = now.checked_add(grace).unwrap_or(now);
        // Replaces the pending expiry, if any
        self.schedule.schedule(id.clone(), purge_at, Task::Purge);
        tracing::debug!(toast = %id, "toast hiding");
        true
    }

    /// Starts removal of every visible toast.
    ///
    /// Returns the number of removals started.
    pub fn clear(&mut self) -> usize {
        let visible: Vec<ToastId> = self
            .order
            .values()
            .filter(|id| self.entries.get(*id).is_some_and(|e| !e.is_hiding()))
            .cloned()
            .collect();
        visible.iter().filter(|id| self.remove(id)).count()
    }

    /// Removes the toast whose close button (or any node inside it) is `node`.
    pub fn dismiss_from_element(&mut self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if let Some(target) = self.surface.attribute(candidate, DISMISS_ATTRIBUTE) {
                let id = ToastId::from(target);
                return self.remove(&id);
            }
            current = self.surface.parent(candidate);
        }
        false
    }

    /// Fires every task due at the clock's current instant.
    ///
    /// Returns the number of tasks fired.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some((id, task)) = self.schedule.pop_due(now) {
            fired += 1;
            match task {
                Task::Expire => {
                    self.remove(&id);
                }
                Task::Purge => self.purge(&id),
            }
        }
        fired
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    fn purge(&mut self, id: &ToastId) {
        let Some(entry) = self.entries.remove(id) else {
            return;
        };
        self.surface.remove(entry.element());
        self.order.remove(&entry.sequence());
        tracing::debug!(toast = %id, "toast removed");
    }

    /// Also skips ids already used by a foreign element on the surface.
    fn fresh_id(&self) -> ToastId {
        loop {
            let id = ToastId::generate();
            if !self.entries.contains_key(&id) && self.surface.element_by_id(id.as_str()).is_none() {
                return id;
            }
        }
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.schedule.next_deadline()
    }

    /// Returns whether `id` is registered (visible or hiding).
    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the registered toast with `id`, if any.
    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&Notification> {
        self.entries.get(id)
    }

    /// Returns the registered toasts in stacking order (oldest first).
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.order.values().filter_map(|id| self.entries.get(id))
    }

    /// Returns the registered ids in stacking order (oldest first).
    pub fn ids(&self) -> impl Iterator<Item = &ToastId> {
        self.order.values()
    }

    /// Returns the number of registered toasts, hiding ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no toast is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of toasts not yet hiding.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.values().filter(|e| !e.is_hiding()).count()
    }

    /// Returns the container element holding the toasts.
    #[must_use]
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Returns the display surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the display times and container settings in use.
    #[must_use]
    pub fn settings(&self) -> &ToastSettings {
        &self.settings
    }

    /// Returns the clock driving deadlines.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

fn attach_container<S: Surface>(surface: &mut S, container_id: &str) -> NodeId {
    if let Some(existing) = surface.element_by_id(container_id) {
        tracing::debug!(container = container_id, "reusing toast container");
        return existing;
    }
    let container = surface.create_element("div");
    surface.set_attribute(container, "id", container_id);
    surface.add_class(container, CONTAINER_CLASS);
    let body = surface.body();
    surface.append_child(body, container);
    container
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{Document, ManualClock};
    use crate::ui::notifications::toast::{CLOSE_CLASS, MESSAGE_CLASS};
    use std::time::Duration;

    fn manager() -> (Manager<Document, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let manager = Manager::new(
            Document::new(),
            clock.clone(),
            ToastSettings::default(),
            ToastLabels::default(),
        );
        (manager, clock)
    }

    fn message_text(manager: &Manager<Document, ManualClock>, id: &ToastId) -> String {
        let element = manager.get(id).expect("registered").element();
        let message = manager
            .surface()
            .find_by_class(element, MESSAGE_CLASS)
            .expect("message element");
        manager.surface().text_content(message)
    }

    /// Registry ids and container children must match one to one.
    fn assert_consistent(manager: &Manager<Document, ManualClock>) {
        let surface = manager.surface();
        let children = surface.children(manager.container());
        let registered: Vec<NodeId> = manager.notifications().map(Notification::element).collect();
        assert_eq!(children, registered);
        for entry in manager.notifications() {
            assert_eq!(surface.attribute(entry.element(), "id"), Some(entry.id().as_str()));
        }
    }

    #[test]
    fn new_manager_is_empty() {
        let (manager, _) = manager();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
        assert!(manager.next_deadline().is_none());
        assert_consistent(&manager);
    }

    #[test]
    fn container_is_created_once() {
        let (manager, _) = manager();
        let surface = manager.surface();
        assert_eq!(surface.element_by_id("toast-container"), Some(manager.container()));
        assert!(surface.has_class(manager.container(), CONTAINER_CLASS));
        assert_eq!(surface.children(surface.body()), vec![manager.container()]);
    }

    #[test]
    fn existing_container_is_reused() {
        let mut document = Document::new();
        let existing = document.create_element("div");
        document.set_attribute(existing, "id", "toast-container");
        document.append_child(document.body(), existing);

        let manager = Manager::new(
            document,
            ManualClock::new(),
            ToastSettings::default(),
            ToastLabels::default(),
        );
        assert_eq!(manager.container(), existing);
        assert_eq!(manager.surface().children(manager.surface().body()).len(), 1);
    }

    #[test]
    fn show_appends_toast_with_kind_class() {
        let (mut manager, _) = manager();
        let id = manager.show("Upload failed", "error", Duration::from_millis(5000));

        let element = manager.get(&id).expect("registered").element();
        let surface = manager.surface();
        assert!(surface.has_class(element, "toast-error"));
        assert_eq!(message_text(&manager, &id), "Upload failed");
        assert_eq!(manager.surface().children(manager.container()), vec![element]);
        assert_consistent(&manager);
    }

    #[test]
    fn purging_from_the_middle_keeps_stacking_order() {
        let (mut manager, clock) = manager();
        let ids: Vec<ToastId> = (0..6)
            .map(|n| manager.show(format!("toast {n}"), Kind::Info, Expiry::Persistent))
            .collect();

        assert!(manager.remove(&ids[1]));
        assert!(manager.remove(&ids[4]));
        clock.advance_ms(300);
        assert_eq!(manager.tick(), 2);

        let left: Vec<_> = manager.ids().cloned().collect();
        assert_eq!(left, vec![ids[0].clone(), ids[2].clone(), ids[3].clone(), ids[5].clone()]);
        assert_consistent(&manager);

        let newest = manager.info("newest");
        assert_eq!(manager.ids().last(), Some(&newest));
        assert_consistent(&manager);
    }

    #[test]
    fn live_toasts_are_found_by_id_and_purged_ones_are_not() {
        let (mut manager, clock) = manager();
        let kept = manager.info("kept");
        let gone = manager.info("gone");

        manager.remove(&gone);
        clock.advance_ms(300);
        manager.tick();

        let kept_element = manager.get(&kept).expect("registered").element();
        assert_eq!(manager.surface().element_by_id(kept.as_str()), Some(kept_element));
        assert_eq!(manager.surface().element_by_id(gone.as_str()), None);
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn error_and_warning_toasts_log_their_text_as_a_field() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .finish();

        let (mut manager, _) = manager();
        tracing::subscriber::with_default(subscriber, || {
            manager.error("Upload failed");
            manager.warning("Disk almost full");
        });

        let bytes = log.0.lock().expect("log buffer").clone();
        let output = String::from_utf8(bytes).expect("utf-8 log");
        assert!(output.contains("error toast text=Upload failed"), "{output}");
        assert!(output.contains("warning toast text=Disk almost full"), "{output}");
    }

    #[test]
    fn newest_toast_is_stacked_last() {
        let (mut manager, _) = manager();
        let first = manager.info("first");
        let second = manager.info("second");
        let third = manager.info("third");

        let order: Vec<_> = manager.ids().cloned().collect();
        assert_eq!(order, vec![first, second, third]);
        assert_consistent(&manager);
    }

    #[test]
    fn unknown_kind_renders_as_info() {
        let (mut manager, _) = manager();
        let id = manager.show("hello", "fatal", Expiry::Persistent);

        let entry = manager.get(&id).expect("registered");
        assert_eq!(entry.kind(), Kind::Info);
        assert!(manager.surface().has_class(entry.element(), "toast-info"));
    }

    #[test]
    fn ids_are_unique_across_rapid_calls() {
        let (mut manager, _) = manager();
        let ids: std::collections::HashSet<_> =
            (0..200).map(|i| manager.info(format!("toast {i}"))).collect();
        assert_eq!(ids.len(), 200);
        assert_eq!(manager.len(), 200);
    }

    #[test]
    fn toast_survives_until_its_duration_then_hides() {
        let (mut manager, clock) = manager();
        let id = manager.show("bye", Kind::Info, Duration::from_millis(5000));

        clock.advance_ms(4999);
        manager.tick();
        assert!(manager.contains(&id));
        assert!(!manager.get(&id).expect("registered").is_hiding());

        clock.advance_ms(1);
        manager.tick();
        let element = manager.get(&id).expect("still registered while hiding").element();
        assert!(manager.surface().has_class(element, HIDING_CLASS));
        assert!(manager.surface().is_attached(element));

        clock.advance_ms(300);
        manager.tick();
        assert!(!manager.contains(&id));
        assert!(!manager.surface().is_attached(element));
        assert!(manager.surface().children(manager.container()).is_empty());
        assert_consistent(&manager);
    }

    #[test]
    fn persistent_toast_stays_until_removed() {
        let (mut manager, clock) = manager();
        let id = manager.show("sticky", Kind::Warning, Expiry::from_millis(0));
        let negative = manager.show("sticky too", Kind::Info, Expiry::from_millis(-10));

        clock.advance(Duration::from_secs(3600));
        manager.tick();
        assert!(manager.contains(&id));
        assert!(manager.contains(&negative));
        assert!(manager.next_deadline().is_none());

        assert!(manager.remove(&id));
        clock.advance_ms(300);
        manager.tick();
        assert!(!manager.contains(&id));
        assert!(manager.contains(&negative));
    }

    #[test]
    fn remove_twice_equals_remove_once() {
        let (mut manager, clock) = manager();
        let id = manager.info("twice");

        assert!(manager.remove(&id));
        assert!(!manager.remove(&id));

        clock.advance_ms(300);
        assert_eq!(manager.tick(), 1);
        assert!(!manager.remove(&id));
        assert!(manager.is_empty());
        assert_consistent(&manager);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let (mut manager, _) = manager();
        let kept = manager.info("kept");

        assert!(!manager.remove(&ToastId::from("toast-0-neverissd")));
        assert_eq!(manager.len(), 1);
        assert!(manager.contains(&kept));
    }

    #[test]
    fn manual_removal_cancels_auto_dismiss() {
        let (mut manager, clock) = manager();
        let id = manager.show("closing", Kind::Info, Duration::from_millis(5000));

        manager.remove(&id);
        clock.advance_ms(300);
        assert_eq!(manager.tick(), 1);
        assert!(!manager.contains(&id));

        clock.advance_ms(10_000);
        assert_eq!(manager.tick(), 0);
        assert!(manager.next_deadline().is_none());
    }

    #[test]
    fn removal_keeps_element_during_exit_animation() {
        let (mut manager, clock) = manager();
        let id = manager.info("animating");
        let element = manager.get(&id).expect("registered").element();

        manager.remove(&id);
        clock.advance_ms(299);
        manager.tick();
        assert!(manager.contains(&id));
        assert!(manager.surface().is_attached(element));

        clock.advance_ms(1);
        manager.tick();
        assert!(!manager.contains(&id));
    }

    #[test]
    fn purged_toasts_free_their_nodes() {
        let (mut manager, clock) = manager();
        let baseline = manager.surface().node_count();

        for i in 0..10 {
            manager.success(format!("saved {i}"));
        }
        assert!(manager.surface().node_count() > baseline);

        clock.advance_ms(4000);
        manager.tick();
        clock.advance_ms(300);
        manager.tick();
        assert!(manager.is_empty());
        assert_eq!(manager.surface().node_count(), baseline);
    }

    #[test]
    fn convenience_methods_use_kind_durations() {
        let (mut manager, _) = manager();
        let cases = [
            (manager.success("s"), Kind::Success, 4000),
            (manager.info("i"), Kind::Info, 4000),
            (manager.warning("w"), Kind::Warning, 5000),
            (manager.error("e"), Kind::Error, 6000),
            (manager.show_default("d"), Kind::Info, 5000),
        ];

        for (id, kind, millis) in cases {
            let entry = manager.get(&id).expect("registered");
            assert_eq!(entry.kind(), kind);
            assert_eq!(entry.expiry(), Expiry::After(Duration::from_millis(millis)));
        }
    }

    #[test]
    fn explicit_expiry_overrides_kind_default() {
        let (mut manager, _) = manager();
        let id = manager.error_for("stay", Expiry::Persistent);
        assert!(manager.get(&id).expect("registered").expiry().is_persistent());
    }

    #[test]
    fn script_message_is_not_markup() {
        let (mut manager, _) = manager();
        let id = manager.show("<script>x</script>", "info", Duration::from_millis(5000));

        assert_eq!(message_text(&manager, &id), "<script>x</script>");
        assert!(manager.surface().elements_by_tag("script").is_empty());
        let html = manager.surface().inner_html(manager.container());
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn close_button_dismisses_its_toast() {
        let (mut manager, _) = manager();
        let id = manager.info("close me");
        let element = manager.get(&id).expect("registered").element();
        let close = manager
            .surface()
            .find_by_class(element, CLOSE_CLASS)
            .expect("close button");

        assert!(manager.dismiss_from_element(close));
        assert!(manager.get(&id).expect("hiding").is_hiding());
        assert!(!manager.dismiss_from_element(manager.container()));
    }

    #[test]
    fn handle_message_dismiss_and_tick() {
        let (mut manager, clock) = manager();
        let id = manager.info("via message");

        manager.handle_message(&Message::Dismiss(id.clone()));
        clock.advance_ms(300);
        manager.handle_message(&Message::Tick);
        assert!(!manager.contains(&id));
    }

    #[test]
    fn clear_hides_every_visible_toast() {
        let (mut manager, clock) = manager();
        manager.info("one");
        let hiding = manager.info("two");
        manager.remove(&hiding);
        manager.warning("three");

        assert_eq!(manager.clear(), 2);
        assert_eq!(manager.visible_count(), 0);

        clock.advance_ms(300);
        manager.tick();
        assert!(manager.is_empty());
        assert_consistent(&manager);
    }

    #[test]
    fn zero_grace_detaches_on_the_same_tick() {
        let settings = ToastSettings {
            exit_animation_ms: 0,
            ..ToastSettings::default()
        };
        let clock = ManualClock::new();
        let mut manager = Manager::new(
            Document::new(),
            clock.clone(),
            settings,
            ToastLabels::default(),
        );
        let id = manager.info("quick");

        clock.advance_ms(4000);
        assert_eq!(manager.tick(), 2);
        assert!(!manager.contains(&id));
    }

    #[test]
    fn custom_container_id_is_used() {
        let settings = ToastSettings {
            container_id: "notices".to_string(),
            ..ToastSettings::default()
        };
        let manager = Manager::new(
            Document::new(),
            ManualClock::new(),
            settings,
            ToastLabels::default(),
        );
        assert_eq!(
            manager.surface().element_by_id("notices"),
            Some(manager.container())
        );
    }
}
