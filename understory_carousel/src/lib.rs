// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless, infinite-loop slide carousel.
//!
//! This crate implements the control logic of a one-slide-at-a-time carousel
//! of the kind found on touch layouts: a horizontal strip of slides that wraps
//! around seamlessly, advances on a timer, follows the finger while dragged,
//! and pauses while scrolled out of view or backgrounded.
//!
//! It deliberately does **not** render anything. Host frameworks are
//! responsible for:
//!
//! - Laying out the `N + 2` entries of the [`SlideRing`] side by side, each one
//!   viewport wide, and drawing each entry's payload.
//! - Implementing [`Viewport`] to translate the strip and toggle animation.
//! - Forwarding pointer events, visibility changes, and animation-end
//!   notifications (tagged with the move's [`TransitionId`]), and calling
//!   [`Carousel::tick`] / [`Carousel::on_frame`] when asked to.
//!
//! ## The ring
//!
//! The real slides are bracketed by two clones: a copy of the last slide at
//! position `0` and a copy of the first at position `N + 1`. Advancing past the
//! last slide animates onto the trailing clone, then silently jumps back to
//! position `1` with animation disabled for one frame. The strip therefore
//! never comes to rest on a clone.
//!
//! ## State machine
//!
//! ```text
//! Idle ──next/prev/go_to/timer──▶ Transitioning | AutoAdvancing ──end──▶ Idle
//! Idle ──pointer_down──▶ ManualDragging ──pointer_up──▶ Transitioning (commit)
//!                                        └──────────────▶ Idle (revert)
//! ```
//!
//! While a move animates or a drag is active, every other request to change
//! position is refused. This single guard keeps rapid taps, swipes, and timer
//! ticks from corrupting the ring position.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{Carousel, CarouselConfig, CarouselEvent, Transition, Viewport};
//!
//! #[derive(Default)]
//! struct Strip {
//!     offset: f64,
//! }
//!
//! impl Viewport for Strip {
//!     fn width(&self) -> f64 {
//!         360.0
//!     }
//!     fn set_transition(&mut self, _: Option<Transition>) {}
//!     fn set_offset(&mut self, percent: f64) {
//!         self.offset = percent;
//!     }
//! }
//!
//! let config = CarouselConfig::default().with_auto_advance_interval_ms(4_000);
//! let mut carousel = Carousel::builder(["design", "build", "grow"])
//!     .viewport(Strip::default())
//!     .config(config)
//!     .build(0)
//!     .unwrap();
//!
//! // The auto-advance timer is due at t = 4000.
//! assert_eq!(carousel.next_deadline(), Some(4_000));
//! carousel.tick(4_000);
//! let id = carousel.transition_id().unwrap();
//! carousel.on_transition_end(id);
//! assert_eq!(carousel.current_index(), 1);
//!
//! // A manual move; pressing again while it animates is ignored.
//! assert!(carousel.next(5_000).unwrap());
//! assert!(!carousel.next(5_010).unwrap());
//! carousel.on_transition_end(carousel.transition_id().unwrap());
//! assert_eq!(carousel.current_index(), 2);
//!
//! // Wrapping past the end lands on the trailing clone, then teleports.
//! carousel.next(6_000).unwrap();
//! carousel.on_transition_end(carousel.transition_id().unwrap());
//! assert!(carousel.wants_frame());
//! carousel.on_frame();
//! assert_eq!(carousel.position(), 1);
//! assert_eq!(carousel.viewport().offset, -100.0);
//!
//! let changes: Vec<_> = carousel
//!     .drain_events()
//!     .into_iter()
//!     .filter_map(|e| match e {
//!         CarouselEvent::SlideChanged { index, .. } => Some(index),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(changes, [1, 2, 0]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`CarouselConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod breakpoint;
mod config;
mod controller;
mod error;
mod event;
mod pagination;
mod ring;
mod viewport;

pub use breakpoint::{Breakpoint, BreakpointChange, ResponsiveCarousel};
pub use config::{CarouselConfig, ConfigError, Easing, Transition};
pub use controller::{Carousel, CarouselBuilder, CarouselState, resolve_swipe};
pub use error::{CarouselError, InitError};
pub use event::{
    AutoAdvanceStatus, CarouselEvent, Direction, EVENT_QUEUE_LIMIT, GestureOutcome, ListenerId,
    Recovery, TransitionCause, TransitionId,
};
pub use pagination::{Indicator, Indicators};
pub use ring::{RingEntry, Slide, SlideRing};
pub use viewport::{Viewport, drag_offset, resting_offset};

pub use understory_event_state::visibility::Suspension;
