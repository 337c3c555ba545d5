// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications emitted to the host.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

/// Direction of a one-slide move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the following slide (content moves right to left).
    Next,
    /// Toward the preceding slide.
    Prev,
}

/// What started a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionCause {
    /// [`Carousel::next`](crate::Carousel::next).
    Next,
    /// [`Carousel::prev`](crate::Carousel::prev).
    Prev,
    /// [`Carousel::go_to`](crate::Carousel::go_to).
    GoTo,
    /// The auto-advance timer.
    AutoAdvance,
    /// A committed drag gesture.
    Swipe(Direction),
}

/// How a drag gesture was resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureOutcome {
    /// Moved one slide in the given direction.
    Commit(Direction),
    /// Returned to the slide shown when the gesture started.
    Revert,
}

/// Whether the auto-advance timer is armed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AutoAdvanceStatus {
    /// The timer is armed.
    Running,
    /// The timer is cleared until every suspension reason goes away.
    Suspended,
}

/// A fault that was corrected locally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Recovery {
    /// The pointer was cancelled or lost mid-drag; the gesture was reverted.
    GestureInterrupted,
    /// A transition never reported completion; the ring was snapped to rest.
    TransitionTimeout,
}

/// Notification emitted by a [`Carousel`](crate::Carousel).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CarouselEvent {
    /// The displayed real slide changed. Emitted as the move starts.
    SlideChanged {
        /// New real index.
        index: usize,
        /// Previously displayed real index.
        previous: usize,
    },
    /// An animated move started.
    TransitionStarted {
        /// Ticket the host passes back to
        /// [`Carousel::on_transition_end`](crate::Carousel::on_transition_end).
        id: TransitionId,
        /// Real index shown before the move.
        from: usize,
        /// Real index shown after the move.
        to: usize,
        /// What triggered it.
        cause: TransitionCause,
    },
    /// The ring was re-centered from a clone without animation.
    Teleported {
        /// Clone position.
        from: usize,
        /// Equivalent real position.
        to: usize,
    },
    /// The carousel came to rest on a real slide.
    Settled {
        /// Real index at rest.
        index: usize,
    },
    /// A drag gesture ended.
    GestureResolved(GestureOutcome),
    /// Auto-advance was suspended or resumed.
    AutoAdvance(AutoAdvanceStatus),
    /// A runtime fault was corrected.
    Recovered(Recovery),
}

/// Identifies one animated move.
///
/// Every transition gets a fresh id, so a completion reported for a move that
/// was already abandoned (for example after a timeout) can be told apart from
/// the completion of the move in flight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

impl TransitionId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value, mostly useful for logging.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Handle returned by [`Carousel::subscribe`](crate::Carousel::subscribe).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&CarouselEvent)>;

/// Number of undrained events retained for polling hosts.
pub const EVENT_QUEUE_LIMIT: usize = 256;

/// Listener registry plus a bounded pull queue.
pub(crate) struct EventHub {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
    queue: VecDeque<CarouselEvent>,
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .field("queue", &self.queue)
            .finish()
    }
}

impl EventHub {
    pub(crate) fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
            queue: VecDeque::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    pub(crate) fn emit(&mut self, event: CarouselEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
        if self.queue.len() == EVENT_QUEUE_LIMIT {
            self.queue.pop_front();
        }
        self.queue.push_back(event);
    }

    pub(crate) fn drain(&mut self) -> Vec<CarouselEvent> {
        self.queue.drain(..).collect()
    }

    pub(crate) fn clear(&mut self) {
        self.listeners.clear();
        self.queue.clear();
    }
}
