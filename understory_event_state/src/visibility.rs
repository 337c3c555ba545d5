// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility gate: decide whether periodic work should run.
//!
//! A [`VisibilityGate`] collects the reasons a component should pause its
//! background activity (auto-advance, polling, idle animations) and reports a
//! [`GateChange`] only when the overall answer flips. Reports are idempotent:
//! telling the gate "out of view" twice suspends once, and a resume is reported
//! only after the last remaining reason clears.
//!
//! The visibility input is the fraction of the component inside the viewport,
//! as produced by an intersection observer. The component counts as out of
//! view while that fraction is below the gate's threshold.
//!
//! ```
//! use understory_event_state::visibility::{GateChange, Suspension, VisibilityGate};
//!
//! let mut gate = VisibilityGate::new(0.3);
//!
//! assert_eq!(gate.set_backgrounded(true), Some(GateChange::Suspended));
//! assert_eq!(gate.set_visible_fraction(0.0), None);
//! assert_eq!(gate.set_backgrounded(false), None);
//! assert_eq!(gate.reasons(), Suspension::OUT_OF_VIEW);
//! assert_eq!(gate.set_visible_fraction(1.0), Some(GateChange::Resumed));
//! ```

use bitflags::bitflags;

bitflags! {
    /// Reasons periodic work is currently suspended.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Suspension: u8 {
        /// Visible fraction is below the threshold.
        const OUT_OF_VIEW = 1 << 0;
        /// The host page or window is hidden.
        const BACKGROUNDED = 1 << 1;
        /// The user is interacting, or a post-interaction grace period is running.
        const INTERACTING = 1 << 2;
        /// The host switched the activity off.
        const DISABLED = 1 << 3;
    }
}

/// A change in the gate's overall state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GateChange {
    /// Work should stop.
    Suspended,
    /// Work may run again.
    Resumed,
}

/// Tracks suspension reasons and reports transitions.
#[derive(Clone, Debug)]
pub struct VisibilityGate {
    threshold: f64,
    reasons: Suspension,
}

impl VisibilityGate {
    /// Creates an active gate with the given in-view threshold.
    ///
    /// The threshold is clamped to `[0, 1]`; a NaN threshold is treated as `0`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            reasons: Suspension::empty(),
        }
    }

    /// The in-view threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Currently active suspension reasons.
    #[must_use]
    pub fn reasons(&self) -> Suspension {
        self.reasons
    }

    /// Returns `true` when no suspension reason is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.reasons.is_empty()
    }

    /// Reports the visible fraction of the component.
    ///
    /// NaN reports are ignored.
    pub fn set_visible_fraction(&mut self, fraction: f64) -> Option<GateChange> {
        if fraction.is_nan() {
            return None;
        }
        self.set(Suspension::OUT_OF_VIEW, fraction < self.threshold)
    }

    /// Reports whether the host page is backgrounded.
    pub fn set_backgrounded(&mut self, backgrounded: bool) -> Option<GateChange> {
        self.set(Suspension::BACKGROUNDED, backgrounded)
    }

    /// Adds a suspension reason.
    pub fn hold(&mut self, reason: Suspension) -> Option<GateChange> {
        self.set(reason, true)
    }

    /// Clears a suspension reason.
    pub fn release(&mut self, reason: Suspension) -> Option<GateChange> {
        self.set(reason, false)
    }

    /// Sets or clears `reason`, reporting a change of the overall state.
    pub fn set(&mut self, reason: Suspension, on: bool) -> Option<GateChange> {
        let was_active = self.is_active();
        self.reasons.set(reason, on);
        match (was_active, self.is_active()) {
            (true, false) => Some(GateChange::Suspended),
            (false, true) => Some(GateChange::Resumed),
            _ => None,
        }
    }
}
