// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Width breakpoint for touch-only carousels.
//!
//! A carousel that presents one slide at a time usually only makes sense on
//! narrow screens; wider layouts show every slide in a grid. [`Breakpoint`]
//! reports when the host width crosses that limit, and [`ResponsiveCarousel`]
//! uses it to build and tear down a [`Carousel`] on demand.

use tracing::debug;

use crate::controller::Carousel;
use crate::error::InitError;
use crate::viewport::Viewport;

/// A width crossing reported by [`Breakpoint::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BreakpointChange {
    /// The width is now at or below the limit.
    Entered,
    /// The width is now above the limit.
    Exited,
}

/// Tracks whether a width is at or below a limit.
///
/// ```
/// use understory_carousel::{Breakpoint, BreakpointChange};
///
/// let mut bp = Breakpoint::mobile();
/// assert_eq!(bp.update(1280.0), None);
/// assert_eq!(bp.update(390.0), Some(BreakpointChange::Entered));
/// assert_eq!(bp.update(400.0), None);
/// assert_eq!(bp.update(1024.0), Some(BreakpointChange::Exited));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Breakpoint {
    max_width: f64,
    inside: bool,
}

impl Breakpoint {
    /// Conventional upper bound for phone layouts, in logical pixels.
    pub const MOBILE_MAX_WIDTH: f64 = 768.0;

    /// Creates a breakpoint that starts outside.
    #[must_use]
    pub fn new(max_width: f64) -> Self {
        Self {
            max_width,
            inside: false,
        }
    }

    /// Breakpoint at [`MOBILE_MAX_WIDTH`](Self::MOBILE_MAX_WIDTH).
    #[must_use]
    pub fn mobile() -> Self {
        Self::new(Self::MOBILE_MAX_WIDTH)
    }

    /// The limit, inclusive.
    #[must_use]
    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    /// Returns `true` if the last reported width was at or below the limit.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Reports the current width. Non-finite widths are ignored.
    pub fn update(&mut self, width: f64) -> Option<BreakpointChange> {
        if !width.is_finite() {
            return None;
        }
        let inside = width <= self.max_width;
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside {
            BreakpointChange::Entered
        } else {
            BreakpointChange::Exited
        })
    }

    /// Forgets the last report; the next width at or below the limit enters again.
    pub fn reset(&mut self) {
        self.inside = false;
    }
}

/// A carousel that exists only while the host width is inside a [`Breakpoint`].
///
/// The host forwards its width through [`resize`](Self::resize). Entering the
/// breakpoint calls `factory` to build a carousel; leaving it destroys the
/// carousel.
#[derive(Debug)]
pub struct ResponsiveCarousel<S, V: Viewport, F> {
    breakpoint: Breakpoint,
    factory: F,
    carousel: Option<Carousel<S, V>>,
}

impl<S, V, F> ResponsiveCarousel<S, V, F>
where
    V: Viewport,
    F: FnMut(u64) -> Result<Carousel<S, V>, InitError>,
{
    /// Creates a wrapper with no carousel yet.
    pub fn new(breakpoint: Breakpoint, factory: F) -> Self {
        Self {
            breakpoint,
            factory,
            carousel: None,
        }
    }

    /// Reports the host width at time `now`.
    ///
    /// If the factory fails, the breakpoint is reset so a later resize
    /// retries, and the error is returned.
    pub fn resize(&mut self, width: f64, now: u64) -> Result<Option<BreakpointChange>, InitError> {
        let change = self.breakpoint.update(width);
        match change {
            Some(BreakpointChange::Entered) => match (self.factory)(now) {
                Ok(carousel) => {
                    debug!(width, "breakpoint entered; carousel built");
                    self.carousel = Some(carousel);
                }
                Err(err) => {
                    self.breakpoint.reset();
                    return Err(err);
                }
            },
            Some(BreakpointChange::Exited) => {
                if let Some(mut carousel) = self.carousel.take() {
                    carousel.destroy();
                }
                debug!(width, "breakpoint exited; carousel destroyed");
            }
            None => {}
        }
        Ok(change)
    }

    /// The breakpoint.
    #[must_use]
    pub fn breakpoint(&self) -> &Breakpoint {
        &self.breakpoint
    }

    /// The live carousel, if the width is inside the breakpoint.
    #[must_use]
    pub fn carousel(&self) -> Option<&Carousel<S, V>> {
        self.carousel.as_ref()
    }

    /// Mutable access to the live carousel.
    pub fn carousel_mut(&mut self) -> Option<&mut Carousel<S, V>> {
        self.carousel.as_mut()
    }
}
