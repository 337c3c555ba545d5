// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering seam between the controller and the host.

use alloc::boxed::Box;

use crate::config::Transition;

/// The host surface that displays the ring.
///
/// The ring is laid out as `N + 2` slides, each one viewport wide, in a single
/// horizontal strip. The controller positions the strip by calling
/// [`set_offset`](Self::set_offset) with a translation expressed as a
/// percentage of the viewport width (`-100.0` shows position `1`), and chooses
/// whether the host animates that change through
/// [`set_transition`](Self::set_transition).
///
/// A DOM host maps these onto `transition` and `transform: translate3d(..)`; a
/// retained-mode toolkit maps them onto its own animation primitives. The host
/// must report the end of each animated move back through
/// [`Carousel::on_transition_end`](crate::Carousel::on_transition_end).
pub trait Viewport {
    /// Current width of the visible area in logical pixels.
    fn width(&self) -> f64;

    /// Enables animation for subsequent offset changes, or disables it with `None`.
    fn set_transition(&mut self, transition: Option<Transition>);

    /// Moves the strip to `percent` of the viewport width.
    fn set_offset(&mut self, percent: f64);
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn set_transition(&mut self, transition: Option<Transition>) {
        (**self).set_transition(transition);
    }

    fn set_offset(&mut self, percent: f64) {
        (**self).set_offset(percent);
    }
}

impl<V: Viewport + ?Sized> Viewport for Box<V> {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn set_transition(&mut self, transition: Option<Transition>) {
        (**self).set_transition(transition);
    }

    fn set_offset(&mut self, percent: f64) {
        (**self).set_offset(percent);
    }
}

/// Strip offset, in percent of the viewport width, that rests on `position`.
#[must_use]
pub fn resting_offset(position: usize) -> f64 {
    -(position as f64) * 100.0
}

/// Strip offset while dragging: the resting offset of `position` shifted by
/// `delta_x` pixels of a `width`-pixel viewport.
///
/// A non-positive or non-finite `width` yields the resting offset.
#[must_use]
pub fn drag_offset(position: usize, delta_x: f64, width: f64) -> f64 {
    let base = resting_offset(position);
    if !(width.is_finite() && width > 0.0) || !delta_x.is_finite() {
        return base;
    }
    base + delta_x / width * 100.0
}
