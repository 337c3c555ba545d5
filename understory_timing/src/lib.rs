// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer queue primitives for UI runtimes.
//!
//! UI components frequently need "call me back later" behavior: an auto-advance
//! interval, a watchdog that fires if an animation never reports completion, a
//! grace period after a gesture. This crate models those as plain data so that
//! the component owning them stays independent of any event loop, executor, or
//! platform timer API.
//!
//! - [`TimerQueue`]: one-shot and repeating timers keyed by a caller-chosen
//!   payload. The host asks for [`TimerQueue::next_deadline`], sleeps or
//!   schedules a platform timer for that instant, and then pops expired timers.
//! - [`FrameRequest`]: a coalescing "I need one more animation frame" flag, the
//!   headless equivalent of a single pending `requestAnimationFrame` handle.
//!
//! Time is an opaque monotonic `u64` supplied by the host. Components in this
//! workspace use milliseconds, but nothing here depends on the unit.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::TimerQueue;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Job {
//!     Blink,
//!     Timeout,
//! }
//!
//! let mut timers = TimerQueue::new();
//! let blink = timers.schedule_repeating(0, 500, Job::Blink);
//! timers.schedule_after(0, 1200, Job::Timeout);
//!
//! assert_eq!(timers.next_deadline(), Some(500));
//!
//! let fired: Vec<_> = timers.drain_expired(1200).into_iter().map(|t| t.payload).collect();
//! // The repeating timer fires once per poll, even when several periods elapsed.
//! assert_eq!(fired, vec![Job::Blink, Job::Timeout]);
//! assert_eq!(timers.next_deadline(), Some(1500));
//!
//! timers.cancel(blink);
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod frame;
mod queue;

pub use frame::FrameRequest;
pub use queue::{Expired, TimerId, TimerQueue};
