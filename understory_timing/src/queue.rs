// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timer queue with one-shot and repeating entries.

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Handle to a scheduled timer.
///
/// Identifiers are never reused by the queue that issued them, so a stale
/// handle can be cancelled safely: it simply no longer matches anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw identifier value, mostly useful for logging.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A timer that reached its deadline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expired<T> {
    /// Handle of the timer that fired.
    pub id: TimerId,
    /// The deadline that was reached.
    pub deadline: u64,
    /// Caller payload attached when the timer was scheduled.
    pub payload: T,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: u64,
    period: Option<u64>,
    payload: T,
}

/// A small queue of pending timers.
///
/// Components usually hold only a handful of timers at once, so entries live
/// inline in a [`SmallVec`] and lookups are linear scans.
///
/// The queue never observes the clock on its own; every method that needs the
/// current time takes it as `now`.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: SmallVec<[Entry<T>; 4]>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    fn issue(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Schedules a one-shot timer at an absolute `deadline`.
    pub fn schedule_at(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = self.issue();
        self.entries.push(Entry {
            id,
            deadline,
            period: None,
            payload,
        });
        id
    }

    /// Schedules a one-shot timer `delay` units after `now`.
    pub fn schedule_after(&mut self, now: u64, delay: u64, payload: T) -> TimerId {
        self.schedule_at(now.saturating_add(delay), payload)
    }

    /// Schedules a repeating timer whose first deadline is `now + period`.
    ///
    /// A `period` of zero is treated as one so the timer cannot spin.
    pub fn schedule_repeating(&mut self, now: u64, period: u64, payload: T) -> TimerId {
        let period = period.max(1);
        let id = self.issue();
        self.entries.push(Entry {
            id,
            deadline: now.saturating_add(period),
            period: Some(period),
            payload,
        });
        id
    }

    /// Cancels a timer. Returns `true` if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Removes every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if the timer is still pending.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the deadline of a pending timer.
    #[must_use]
    pub fn deadline_of(&self, id: TimerId) -> Option<u64> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.deadline)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    fn earliest_expired(&self, now: u64) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.id))
            .map(|(i, _)| i)
    }
}

impl<T: Clone> TimerQueue<T> {
    /// Pops the earliest timer whose deadline is at or before `now`.
    ///
    /// One-shot timers are removed. Repeating timers are re-armed at the first
    /// multiple of their period strictly after `now`, so a host that polls late
    /// observes a single firing rather than a burst of missed ones. A repeating
    /// timer whose next deadline would not fit in a `u64` is removed.
    ///
    /// Popping one timer at a time lets the caller cancel or schedule other
    /// timers in response before the next one is considered.
    pub fn pop_expired(&mut self, now: u64) -> Option<Expired<T>> {
        let index = self.earliest_expired(now)?;
        let entry = &mut self.entries[index];
        let fired = Expired {
            id: entry.id,
            deadline: entry.deadline,
            payload: entry.payload.clone(),
        };
        match entry.period {
            Some(period) => {
                let missed = (now - entry.deadline) / period;
                let next = period
                    .checked_mul(missed + 1)
                    .and_then(|step| entry.deadline.checked_add(step));
                match next {
                    Some(deadline) => entry.deadline = deadline,
                    None => {
                        self.entries.remove(index);
                    }
                }
            }
            None => {
                self.entries.remove(index);
            }
        }
        Some(fired)
    }

    /// Pops every timer expired at `now`, in deadline order.
    pub fn drain_expired(&mut self, now: u64) -> Vec<Expired<T>> {
        let mut out = Vec::new();
        // Each pop either removes a timer or re-arms it strictly past `now`.
        while let Some(fired) = self.pop_expired(now) {
            out.push(fired);
        }
        out
    }
}
