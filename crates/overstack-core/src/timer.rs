#![forbid(unsafe_code)]

//! Fire-once timers on a host-driven clock.
//!
//! The queue never looks at a wall clock. Hosts pass the current time into
//! [`TimerQueue::schedule`] and [`TimerQueue::drain_due`]; [`MonotonicClock`]
//! is available for hosts that want real elapsed time.
//!
//! # Invariants
//!
//! - Due timers drain in deadline order; equal deadlines drain in scheduling order.
//! - A drained or cancelled timer never fires again.

use std::collections::BTreeMap;
use std::time::Duration;

use ahash::AHashMap;
use web_time::Instant;

/// Handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw sequence number.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Ordered set of pending fire-once timers carrying a payload.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    pending: BTreeMap<(Duration, u64), T>,
    deadlines: AHashMap<u64, Duration>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            pending: BTreeMap::new(),
            deadlines: AHashMap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `payload` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, payload: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let deadline = now.saturating_add(delay);
        self.pending.insert((deadline, seq), payload);
        self.deadlines.insert(seq, deadline);
        TimerId(seq)
    }

    /// Cancel a pending timer. Returns `false` if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id.0) {
            Some(deadline) => self.pending.remove(&(deadline, id.0)).is_some(),
            None => false,
        }
    }

    /// Remove and return every timer due at or before `now`.
    pub fn drain_due(&mut self, now: Duration) -> Vec<(TimerId, T)> {
        let mut due = Vec::new();
        while let Some((&(deadline, _), _)) = self.pending.first_key_value() {
            if deadline > now {
                break;
            }
            if let Some(((_, seq), payload)) = self.pending.pop_first() {
                self.deadlines.remove(&seq);
                due.push((TimerId(seq), payload));
            }
        }
        due
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Number of pending timers.
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no timers are pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Monotonic time source measured from its creation.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Start a clock at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Time elapsed since the clock started.
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn drains_only_due_timers() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(0), ms(500), "late");
        queue.schedule(ms(0), ms(100), "early");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.next_deadline(), Some(ms(100)));

        assert!(queue.drain_due(ms(99)).is_empty());
        let due: Vec<_> = queue.drain_due(ms(100)).into_iter().map(|(_, p)| p).collect();
        assert_eq!(due, vec!["early"]);

        let due: Vec<_> = queue.drain_due(ms(1_000)).into_iter().map(|(_, p)| p).collect();
        assert_eq!(due, vec!["late"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_deadlines_keep_scheduling_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(0), ms(10), 1);
        queue.schedule(ms(5), ms(5), 2);
        queue.schedule(ms(10), ms(0), 3);
        let due: Vec<_> = queue.drain_due(ms(10)).into_iter().map(|(_, p)| p).collect();
        assert_eq!(due, vec![1, 2, 3]);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(ms(0), ms(50), ());
        assert_eq!(queue.len(), 1);
        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert!(queue.is_empty());
        assert_eq!(queue.next_deadline(), None);
        assert!(queue.drain_due(ms(1_000)).is_empty());
    }

    #[test]
    fn drained_timer_cannot_be_cancelled() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(ms(0), ms(1), ());
        assert_eq!(queue.drain_due(ms(1)).len(), 1);
        assert!(!queue.cancel(id));
    }

    #[test]
    fn monotonic_clock_advances() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
