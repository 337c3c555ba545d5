// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: compute movement deltas, total offsets and release velocity
//! from timestamped position changes.
//!
//! ## Usage
//!
//! 1) Start a drag operation by calling [`DragState::start`] with the initial position and time.
//! 2) On each move event, call [`DragState::update`] to get the movement delta since the last update.
//! 3) Optionally call [`DragState::total_offset`] to get the cumulative offset from the start position.
//! 4) End the drag operation with [`DragState::end`], which returns a [`DragSummary`] and resets state.
//!
//! Velocity is measured between the last two samples, in position units per
//! time unit (logical pixels per millisecond when fed host milliseconds). Two
//! samples with the same timestamp keep the previously measured velocity, so a
//! burst of coalesced events does not produce an infinite reading.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Start dragging at (10, 20) at t = 100
//! drag.start(Point::new(10.0, 20.0), 100);
//! assert!(drag.is_dragging());
//!
//! // Move to (15, 25) at t = 110 - delta is (5, 5)
//! let delta = drag.update(Point::new(15.0, 25.0), 110).unwrap();
//! assert_eq!(delta.x, 5.0);
//! assert_eq!(delta.y, 5.0);
//!
//! // Total offset from start is also (5, 5)
//! let total = drag.total_offset(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(total.x, 5.0);
//! assert_eq!(total.y, 5.0);
//!
//! let summary = drag.end().unwrap();
//! assert_eq!(summary.duration, 10);
//! assert_eq!(summary.velocity.x, 0.5);
//! ```

use kurbo::{Point, Vec2};

/// A pointer position captured at a host timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Pointer position.
    pub pos: Point,
    /// Host timestamp of the sample.
    pub time: u64,
}

impl DragSample {
    /// Creates a sample.
    #[must_use]
    pub const fn new(pos: Point, time: u64) -> Self {
        Self { pos, time }
    }
}

/// Result of a finished drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSummary {
    /// Offset from the start position to the last recorded position.
    pub offset: Vec2,
    /// Velocity between the last two samples.
    pub velocity: Vec2,
    /// Time between the first and last samples.
    pub duration: u64,
}

/// Tracks drag state for move event processing
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Sample at which the drag operation started
    pub start: Option<DragSample>,
    /// Last recorded sample during drag
    pub last: Option<DragSample>,
    velocity: Vec2,
}

impl DragState {
    /// Start tracking a new drag operation from the given position.
    pub fn start(&mut self, pos: Point, time: u64) {
        let sample = DragSample::new(pos, time);
        self.start = Some(sample);
        self.last = Some(sample);
        self.velocity = Vec2::ZERO;
    }

    /// Update the drag state with a new position, returning the movement delta since last update.
    pub fn update(&mut self, pos: Point, time: u64) -> Option<Vec2> {
        self.start?;
        let sample = DragSample::new(pos, time);
        let Some(last) = self.last.replace(sample) else {
            return None;
        };
        let delta = pos - last.pos;
        let dt = time.saturating_sub(last.time);
        if dt > 0 {
            self.velocity = delta / dt as f64;
        }
        Some(delta)
    }

    /// Get total offset from drag start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start.map(|start| current_pos - start.pos)
    }

    /// Velocity between the last two samples, if a drag is active.
    pub fn velocity(&self) -> Option<Vec2> {
        self.start.map(|_| self.velocity)
    }

    /// End the current drag operation and reset state.
    ///
    /// Returns a summary of the drag if one was active.
    pub fn end(&mut self) -> Option<DragSummary> {
        let start = self.start.take();
        let last = self.last.take();
        let velocity = core::mem::replace(&mut self.velocity, Vec2::ZERO);
        let start = start?;
        let last = last.unwrap_or(start);
        Some(DragSummary {
            offset: last.pos - start.pos,
            velocity,
            duration: last.time.saturating_sub(start.time),
        })
    }

    /// Returns `true` while a drag operation is active
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(drag.start.is_none());
        assert!(drag.start.is_some() == drag.last.is_some());
        assert_eq!(drag.velocity(), None);
    }

    #[test]
    fn start_sets_dragging_state() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);

        drag.start(start, 5);

        assert_eq!(drag.start, Some(DragSample::new(start, 5)));
        assert_eq!(drag.start, drag.last);
        assert_eq!(drag.velocity(), Some(Vec2::ZERO));
    }

    #[test]
    fn update_returns_delta_when_dragging() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), 0);

        let new_pos = Point::new(15.0, 25.0);
        let delta = drag.update(new_pos, 5);

        assert_eq!(delta, Some(Vec2::new(5.0, 5.0)));
        assert_eq!(drag.last, Some(DragSample::new(new_pos, 5)));
        assert_eq!(drag.velocity(), Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();

        let delta = drag.update(Point::new(15.0, 25.0), 0);

        assert_eq!(delta, None);
        assert!(drag.last.is_none());
    }

    #[test]
    fn update_with_no_last_sample_returns_none() {
        let mut drag = DragState {
            start: Some(DragSample::new(Point::new(10.0, 20.0), 0)),
            last: None,
            velocity: Vec2::ZERO,
        };

        let new_pos = Point::new(15.0, 25.0);
        let delta = drag.update(new_pos, 3);

        assert_eq!(delta, None);
        assert_eq!(drag.last, Some(DragSample::new(new_pos, 3)));
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 0);

        let delta1 = drag.update(Point::new(5.0, 3.0), 1);
        assert_eq!(delta1, Some(Vec2::new(5.0, 3.0)));

        let delta2 = drag.update(Point::new(8.0, 7.0), 2);
        assert_eq!(delta2, Some(Vec2::new(3.0, 4.0)));

        let delta3 = drag.update(Point::new(10.0, 10.0), 3);
        assert_eq!(delta3, Some(Vec2::new(2.0, 3.0)));
    }

    #[test]
    fn velocity_uses_only_last_two_samples() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 0);

        // Fast first segment, slow second one.
        drag.update(Point::new(100.0, 0.0), 10);
        drag.update(Point::new(104.0, 0.0), 30);

        assert_eq!(drag.velocity(), Some(Vec2::new(0.2, 0.0)));
    }

    #[test]
    fn same_timestamp_keeps_previous_velocity() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(10.0, 0.0), 10);

        drag.update(Point::new(30.0, 0.0), 10);

        assert_eq!(drag.velocity(), Some(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn total_offset_calculates_from_start() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);
        drag.start(start, 0);

        drag.update(Point::new(15.0, 25.0), 1);

        let current = Point::new(20.0, 35.0);
        let total = drag.total_offset(current);

        assert_eq!(total, Some(Vec2::new(10.0, 15.0)));
    }

    #[test]
    fn total_offset_returns_none_when_not_dragging() {
        let drag = DragState::default();

        let total = drag.total_offset(Point::new(100.0, 200.0));

        assert_eq!(total, None);
    }

    #[test]
    fn end_returns_summary_and_resets() {
        let mut drag = DragState::default();
        drag.start(Point::new(200.0, 0.0), 1_000);
        drag.update(Point::new(150.0, 0.0), 1_050);
        drag.update(Point::new(120.0, 0.0), 1_100);

        let summary = drag.end().unwrap();

        assert_eq!(summary.offset, Vec2::new(-80.0, 0.0));
        assert_eq!(summary.duration, 100);
        assert_eq!(summary.velocity, Vec2::new(-0.6, 0.0));
        assert!(drag.start.is_none());
        assert!(drag.last.is_none());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn end_on_fresh_state_is_safe() {
        let mut drag = DragState::default();

        assert_eq!(drag.end(), None);

        assert!(drag.start.is_none());
        assert!(drag.start.is_some() == drag.last.is_some());
    }

    #[test]
    fn negative_movement_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 100.0), 0);

        let delta = drag.update(Point::new(90.0, 85.0), 5);

        assert_eq!(delta, Some(Vec2::new(-10.0, -15.0)));
        assert_eq!(drag.velocity(), Some(Vec2::new(-2.0, -3.0)));
    }

    #[test]
    fn zero_movement_delta() {
        let mut drag = DragState::default();
        let start = Point::new(50.0, 50.0);
        drag.start(start, 0);

        let delta = drag.update(start, 16);

        assert_eq!(delta, Some(Vec2::new(0.0, 0.0)));
        assert_eq!(drag.velocity(), Some(Vec2::ZERO));
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();

        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(10.0, 10.0), 1);

        let new_start = Point::new(50.0, 60.0);
        drag.start(new_start, 100);

        assert_eq!(drag.start, Some(DragSample::new(new_start, 100)));
        assert_eq!(drag.start, drag.last);
        assert_eq!(drag.velocity(), Some(Vec2::ZERO));

        let total = drag.total_offset(Point::new(55.0, 65.0));
        assert_eq!(total, Some(Vec2::new(5.0, 5.0)));
    }
}
