// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for common UI interactions
//! that require stateful tracking across multiple events. Each module handles a
//! specific interaction pattern:
//!
//! - [`drag`]: Track drag operations with timestamped samples, movement deltas,
//!   total offsets and release velocity
//! - [`visibility`]: Gate periodic work (auto-advance, polling, animation) on
//!   whether a component is on screen, foregrounded and not being interacted with
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing or spatial query system
//! - **Clock-free**: Timestamps are supplied by the caller, never read from a clock
//!
//! The crate does not assume any particular UI framework, event system, or scene
//! graph structure. Instead, these managers accept pre-computed information (raw
//! pointer positions, host timestamps, intersection ratios) and produce
//! transition events or state queries that applications can interpret.
//!
//! ## Usage Patterns
//!
//! ### Drag Operations
//!
//! Use [`drag::DragState`] to track pointer drag operations:
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Start drag at (10, 10) at t = 0ms
//! drag.start(Point::new(10.0, 10.0), 0);
//!
//! // Move pointer, get delta since last position
//! let delta = drag.update(Point::new(15.0, 12.0), 10).unwrap();
//! // delta is (5.0, 2.0), velocity is (0.5, 0.2) per ms
//!
//! // Get total offset from start
//! let total = drag.total_offset(Point::new(15.0, 12.0)).unwrap();
//! // total is (5.0, 2.0)
//! # }
//! ```
//!
//! ### Visibility Gating
//!
//! Use [`visibility::VisibilityGate`] to decide whether background work should
//! run, and to learn exactly when that answer flips:
//!
//! ```rust
//! # #[cfg(feature = "visibility")]
//! # fn example() {
//! use understory_event_state::visibility::{GateChange, VisibilityGate};
//!
//! let mut gate = VisibilityGate::new(0.3);
//! assert!(gate.is_active());
//!
//! // Scrolled mostly out of view.
//! assert_eq!(gate.set_visible_fraction(0.1), Some(GateChange::Suspended));
//! // Repeating the same report is a no-op.
//! assert_eq!(gate.set_visible_fraction(0.05), None);
//! // Back in view.
//! assert_eq!(gate.set_visible_fraction(0.8), Some(GateChange::Resumed));
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//! - `visibility`: Enable the suspend/resume gate (requires `bitflags` dependency)
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

#[cfg(feature = "drag")]
pub mod drag;
#[cfg(feature = "visibility")]
pub mod visibility;
