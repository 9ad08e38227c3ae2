// SPDX-License-Identifier: MPL-2.0
//! Cancellable deadlines keyed by toast id.
//!
//! At most one task is pending per key: scheduling again replaces the
//! previous task. Due tasks pop in deadline order, ties in scheduling order.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct Pending<T> {
    at: Instant,
    sequence: u64,
    task: T,
}

/// A deadline queue with per-key cancellation.
#[derive(Debug, Clone)]
pub struct Schedule<K, T> {
    queue: BTreeMap<(Instant, u64), K>,
    pending: HashMap<K, Pending<T>>,
    next_sequence: u64,
}

impl<K, T> Default for Schedule<K, T> {
    fn default() -> Self {
        Self {
            queue: BTreeMap::new(),
            pending: HashMap::new(),
            next_sequence: 0,
        }
    }
}

impl<K: Clone + Eq + Hash, T> Schedule<K, T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` for `key` at `at`, returning the task it replaced.
    pub fn schedule(&mut self, key: K, at: Instant, task: T) -> Option<T> {
        let replaced = self.cancel(&key);
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.insert((at, sequence), key.clone());
        self.pending.insert(key, Pending { at, sequence, task });
        replaced
    }

    /// Cancels the task pending for `key`, if any.
    pub fn cancel(&mut self, key: &K) -> Option<T> {
        let pending = self.pending.remove(key)?;
        self.queue.remove(&(pending.at, pending.sequence));
        Some(pending.task)
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.first_key_value().map(|((at, _), _)| *at)
    }

    /// Returns the deadline pending for `key`.
    #[must_use]
    pub fn deadline(&self, key: &K) -> Option<Instant> {
        self.pending.get(key).map(|pending| pending.at)
    }

    /// Removes and returns the earliest task whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<(K, T)> {
        let (&(at, sequence), _) = self.queue.first_key_value()?;
        if at > now {
            return None;
        }
        let key = self.queue.remove(&(at, sequence))?;
        let pending = self.pending.remove(&key)?;
        Some((key, pending.task))
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn pops_in_deadline_order() {
        let base = Instant::now();
        let mut schedule = Schedule::new();
        schedule.schedule("late", at(base, 300), 3);
        schedule.schedule("early", at(base, 100), 1);
        schedule.schedule("middle", at(base, 200), 2);

        let fired: Vec<_> = std::iter::from_fn(|| schedule.pop_due(at(base, 1000))).collect();
        assert_eq!(fired, vec![("early", 1), ("middle", 2), ("late", 3)]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn ties_pop_in_scheduling_order() {
        let base = Instant::now();
        let mut schedule = Schedule::new();
        schedule.schedule("a", at(base, 100), ());
        schedule.schedule("b", at(base, 100), ());

        assert_eq!(schedule.pop_due(at(base, 100)).map(|(k, ())| k), Some("a"));
        assert_eq!(schedule.pop_due(at(base, 100)).map(|(k, ())| k), Some("b"));
    }

    #[test]
    fn nothing_pops_before_deadline() {
        let base = Instant::now();
        let mut schedule = Schedule::new();
        schedule.schedule("a", at(base, 100), ());

        assert!(schedule.pop_due(at(base, 99)).is_none());
        assert_eq!(schedule.next_deadline(), Some(at(base, 100)));
        assert!(schedule.pop_due(at(base, 100)).is_some());
    }

    #[test]
    fn rescheduling_replaces_previous_task() {
        let base = Instant::now();
        let mut schedule = Schedule::new();
        assert_eq!(schedule.schedule("a", at(base, 100), "expire"), None);
        assert_eq!(schedule.schedule("a", at(base, 500), "purge"), Some("expire"));

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.deadline(&"a"), Some(at(base, 500)));
        assert!(schedule.pop_due(at(base, 100)).is_none());
        assert_eq!(schedule.pop_due(at(base, 500)), Some(("a", "purge")));
    }

    #[test]
    fn cancel_removes_pending_task() {
        let base = Instant::now();
        let mut schedule = Schedule::new();
        schedule.schedule("a", at(base, 100), 1);
        schedule.schedule("b", at(base, 200), 2);

        assert_eq!(schedule.cancel(&"a"), Some(1));
        assert_eq!(schedule.cancel(&"a"), None);
        assert!(!schedule.contains(&"a"));
        assert_eq!(schedule.next_deadline(), Some(at(base, 200)));
    }
}
