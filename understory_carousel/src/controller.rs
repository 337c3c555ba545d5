// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel state machine.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Point;
use tracing::{debug, trace, warn};
use understory_event_state::drag::DragState;
use understory_event_state::visibility::{GateChange, Suspension, VisibilityGate};
use understory_timing::{FrameRequest, TimerId, TimerQueue};

use crate::config::CarouselConfig;
use crate::error::{CarouselError, InitError};
use crate::event::{
    AutoAdvanceStatus, CarouselEvent, Direction, EventHub, GestureOutcome, ListenerId, Recovery,
    TransitionCause, TransitionId,
};
use crate::pagination::Indicators;
use crate::ring::SlideRing;
use crate::viewport::{Viewport, drag_offset, resting_offset};

/// Controller state. Exactly one is active at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CarouselState {
    /// At rest on a real slide; every operation is accepted.
    Idle,
    /// An animated move started by the host or a gesture is in flight.
    Transitioning,
    /// An animated move started by the auto-advance timer is in flight.
    AutoAdvancing,
    /// The pointer is down and the strip tracks it.
    ManualDragging,
}

impl CarouselState {
    /// Returns `true` while an animated move is in flight.
    #[must_use]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Transitioning | Self::AutoAdvancing)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Job {
    AutoAdvance,
    TransitionTimeout,
    ResumeAfterGesture,
}

/// Decides how a released drag resolves.
///
/// The drag commits when its net horizontal `displacement` exceeds
/// `drag_threshold_px` or its release `velocity` exceeds
/// `velocity_threshold`; otherwise it reverts. The direction always follows
/// the sign of the displacement (leftward means [`Direction::Next`]), so a
/// noisy velocity reading can never move the carousel against the finger. A
/// drag with no net displacement reverts.
#[must_use]
pub fn resolve_swipe(displacement: f64, velocity: f64, config: &CarouselConfig) -> GestureOutcome {
    let far = displacement.abs() > config.drag_threshold_px;
    let fast = velocity.abs() > config.velocity_threshold;
    if !(far || fast) || displacement == 0.0 || displacement.is_nan() {
        return GestureOutcome::Revert;
    }
    if displacement < 0.0 {
        GestureOutcome::Commit(Direction::Next)
    } else {
        GestureOutcome::Commit(Direction::Prev)
    }
}

/// Builder for [`Carousel`].
#[derive(Debug)]
pub struct CarouselBuilder<S, V> {
    slides: Vec<S>,
    viewport: Option<V>,
    config: CarouselConfig,
}

impl<S, V: Viewport> CarouselBuilder<S, V> {
    /// Starts a builder over the given slides, in display order.
    pub fn new(slides: impl IntoIterator<Item = S>) -> Self {
        Self {
            slides: slides.into_iter().collect(),
            viewport: None,
            config: CarouselConfig::default(),
        }
    }

    /// Sets the surface the ring is rendered into.
    #[must_use]
    pub fn viewport(mut self, viewport: V) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Replaces the default configuration.
    #[must_use]
    pub fn config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the inputs and builds the controller at host time `now`.
    ///
    /// The first real slide is rendered without animation and the auto-advance
    /// timer is armed.
    pub fn build(self, now: u64) -> Result<Carousel<S, V>, InitError> {
        let ring = SlideRing::new(self.slides)?;
        let viewport = self.viewport.ok_or(InitError::MissingViewport)?;
        let width = viewport.width();
        if !(width.is_finite() && width > 0.0) {
            return Err(InitError::InvalidViewport { width });
        }
        self.config.validate()?;

        let gate = VisibilityGate::new(self.config.visibility_threshold);
        let mut carousel = Carousel {
            ring,
            viewport,
            config: self.config,
            state: CarouselState::Idle,
            position: 1,
            displayed: 0,
            transition: None,
            next_transition: 0,
            drag: DragState::default(),
            pending_offset: None,
            restore_transition: false,
            frame: FrameRequest::default(),
            timers: TimerQueue::new(),
            auto_timer: None,
            timeout_timer: None,
            grace_timer: None,
            gate,
            events: EventHub::new(),
            destroyed: false,
        };
        carousel.viewport.set_transition(None);
        carousel.viewport.set_offset(resting_offset(carousel.position));
        carousel.arm_auto_advance(now);
        debug!(slides = carousel.ring.len(), "carousel initialized");
        Ok(carousel)
    }
}

/// Headless infinite-loop carousel.
///
/// The controller owns a [`SlideRing`] and a [`Viewport`], and is driven by
/// the host:
///
/// - user commands: [`next`](Self::next), [`prev`](Self::prev),
///   [`go_to`](Self::go_to);
/// - pointer input: [`pointer_down`](Self::pointer_down),
///   [`pointer_move`](Self::pointer_move), [`pointer_up`](Self::pointer_up),
///   [`pointer_cancel`](Self::pointer_cancel);
/// - environment: [`set_visible_fraction`](Self::set_visible_fraction),
///   [`set_backgrounded`](Self::set_backgrounded);
/// - callbacks: [`on_transition_end`](Self::on_transition_end) when an
///   animated move finishes, [`on_frame`](Self::on_frame) when
///   [`wants_frame`](Self::wants_frame) is set, and [`tick`](Self::tick) once
///   [`next_deadline`](Self::next_deadline) has passed.
///
/// Entry points that can start a move or touch a timer take the current host
/// time in milliseconds.
///
/// Only one position change can be in flight: while a move animates or a drag
/// is active, further moves are refused (`Ok(false)`) rather than queued.
///
/// After [`destroy`](Self::destroy) (also run on drop) operations return
/// [`CarouselError::Destroyed`] and callbacks do nothing.
#[derive(Debug)]
pub struct Carousel<S, V: Viewport> {
    ring: SlideRing<S>,
    viewport: V,
    config: CarouselConfig,
    state: CarouselState,
    position: usize,
    displayed: usize,
    transition: Option<TransitionId>,
    next_transition: u64,
    drag: DragState,
    pending_offset: Option<f64>,
    restore_transition: bool,
    frame: FrameRequest,
    timers: TimerQueue<Job>,
    auto_timer: Option<TimerId>,
    timeout_timer: Option<TimerId>,
    grace_timer: Option<TimerId>,
    gate: VisibilityGate,
    events: EventHub,
    destroyed: bool,
}

impl<S, V: Viewport> Carousel<S, V> {
    /// Starts a [`CarouselBuilder`].
    pub fn builder(slides: impl IntoIterator<Item = S>) -> CarouselBuilder<S, V> {
        CarouselBuilder::new(slides)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Current ring position in `0..=N + 1`.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Ticket of the animated move in flight, to be passed to
    /// [`on_transition_end`](Self::on_transition_end) when it finishes.
    #[must_use]
    pub fn transition_id(&self) -> Option<TransitionId> {
        self.transition
    }

    /// Real index of the displayed slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.ring.real_index(self.position)
    }

    /// Number of real slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Always `false`; a carousel holds at least one slide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// The slide ring.
    #[must_use]
    pub fn ring(&self) -> &SlideRing<S> {
        &self.ring
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The host surface.
    #[must_use]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Pagination indicators, one per real slide.
    #[must_use]
    pub fn indicators(&self) -> Indicators {
        Indicators::new(self.ring.len(), self.current_index())
    }

    /// Returns `true` once [`destroy`](Self::destroy) has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Returns `true` while the auto-advance timer is armed.
    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.auto_timer.is_some()
    }

    /// Reasons auto-advance is currently suspended.
    #[must_use]
    pub fn suspension(&self) -> Suspension {
        self.gate.reasons()
    }

    /// Earliest host time at which [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Returns `true` when the host should call [`on_frame`](Self::on_frame)
    /// on its next animation frame.
    #[must_use]
    pub fn wants_frame(&self) -> bool {
        self.frame.is_requested()
    }

    /// Registers a listener for [`CarouselEvent`]s.
    pub fn subscribe(&mut self, listener: impl FnMut(&CarouselEvent) + 'static) -> ListenerId {
        self.events.subscribe(Box::new(listener))
    }

    /// Removes a listener. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Takes the events emitted since the last call, oldest first.
    ///
    /// Only the most recent [`EVENT_QUEUE_LIMIT`](crate::EVENT_QUEUE_LIMIT)
    /// events are retained.
    pub fn drain_events(&mut self) -> Vec<CarouselEvent> {
        self.events.drain()
    }

    fn ensure_alive(&self) -> Result<(), CarouselError> {
        if self.destroyed {
            Err(CarouselError::Destroyed)
        } else {
            Ok(())
        }
    }

    /// Moves one slide forward with animation.
    ///
    /// Returns `Ok(false)` if a move or drag is in progress.
    pub fn next(&mut self, now: u64) -> Result<bool, CarouselError> {
        self.ensure_alive()?;
        if self.state != CarouselState::Idle {
            trace!(state = ?self.state, "next ignored");
            return Ok(false);
        }
        let target = self.ring.forward(self.position);
        self.begin_transition(target, TransitionCause::Next, now);
        Ok(true)
    }

    /// Moves one slide back with animation.
    ///
    /// Returns `Ok(false)` if a move or drag is in progress.
    pub fn prev(&mut self, now: u64) -> Result<bool, CarouselError> {
        self.ensure_alive()?;
        if self.state != CarouselState::Idle {
            trace!(state = ?self.state, "prev ignored");
            return Ok(false);
        }
        let target = self.ring.backward(self.position);
        self.begin_transition(target, TransitionCause::Prev, now);
        Ok(true)
    }

    /// Moves to real slide `index` with animation.
    ///
    /// Returns `Ok(false)` if `index` is already displayed or a move or drag
    /// is in progress.
    pub fn go_to(&mut self, index: usize, now: u64) -> Result<bool, CarouselError> {
        self.ensure_alive()?;
        let Some(target) = self.ring.position_of(index) else {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.ring.len(),
            });
        };
        if self.state != CarouselState::Idle || index == self.current_index() {
            trace!(state = ?self.state, index, "go_to ignored");
            return Ok(false);
        }
        self.begin_transition(target, TransitionCause::GoTo, now);
        Ok(true)
    }

    /// Reports that the animated move `id` finished.
    ///
    /// `id` is the ticket from [`CarouselEvent::TransitionStarted`] or
    /// [`transition_id`](Self::transition_id). Landing on a boundary clone
    /// teleports the ring to the matching real position with animation
    /// disabled; animation is re-enabled on the next
    /// [`on_frame`](Self::on_frame), which also completes the transition.
    /// Otherwise the carousel settles immediately.
    ///
    /// Completions for any other move are ignored: one that arrives while
    /// nothing is in flight (after a revert), or one for a move abandoned by
    /// the transition timeout that shows up during a later move.
    pub fn on_transition_end(&mut self, id: TransitionId) {
        if self.destroyed || !self.state.is_transitioning() {
            return;
        }
        if self.transition != Some(id) {
            trace!(id = id.get(), "stale transition end ignored");
            return;
        }
        if self.restore_transition {
            // Already teleported; waiting for the frame that re-enables easing.
            return;
        }
        if self.ring.is_boundary(self.position) {
            self.teleport();
        } else {
            self.settle();
        }
    }

    /// Runs the pending animation-frame work.
    ///
    /// Applies the latest coalesced drag offset and re-enables animation after
    /// a teleport.
    pub fn on_frame(&mut self) {
        if self.destroyed || !self.frame.take() {
            return;
        }
        if let Some(offset) = self.pending_offset.take() {
            if self.state == CarouselState::ManualDragging {
                self.viewport.set_offset(offset);
            }
        }
        if self.restore_transition {
            self.restore_transition = false;
            if self.state != CarouselState::ManualDragging {
                self.viewport.set_transition(Some(self.config.transition()));
            }
            if self.state.is_transitioning() {
                self.settle();
            }
        }
    }

    /// Fires every timer due at `now`.
    pub fn tick(&mut self, now: u64) {
        if self.destroyed {
            return;
        }
        while let Some(expired) = self.timers.pop_expired(now) {
            match expired.payload {
                Job::AutoAdvance => {
                    if self.state == CarouselState::Idle && self.gate.is_active() {
                        let target = self.ring.forward(self.position);
                        self.begin_transition(target, TransitionCause::AutoAdvance, now);
                    } else {
                        trace!(state = ?self.state, "auto-advance tick skipped");
                    }
                }
                Job::TransitionTimeout => {
                    self.timeout_timer = None;
                    if self.state.is_transitioning() {
                        self.recover_from_timeout();
                    }
                }
                Job::ResumeAfterGesture => {
                    self.grace_timer = None;
                    let change = self.gate.release(Suspension::INTERACTING);
                    self.apply_gate(change, now);
                }
            }
        }
    }

    /// Reports how much of the carousel is inside the host viewport.
    ///
    /// Auto-advance is suspended below the configured visibility threshold.
    pub fn set_visible_fraction(&mut self, fraction: f64, now: u64) -> Result<(), CarouselError> {
        self.ensure_alive()?;
        let change = self.gate.set_visible_fraction(fraction);
        self.apply_gate(change, now);
        Ok(())
    }

    /// Reports whether the host page is hidden.
    pub fn set_backgrounded(&mut self, backgrounded: bool, now: u64) -> Result<(), CarouselError> {
        self.ensure_alive()?;
        let change = self.gate.set_backgrounded(backgrounded);
        self.apply_gate(change, now);
        Ok(())
    }

    /// Switches auto-advance on or off.
    pub fn set_auto_advance(&mut self, enabled: bool, now: u64) -> Result<(), CarouselError> {
        self.ensure_alive()?;
        let change = self.gate.set(Suspension::DISABLED, !enabled);
        self.apply_gate(change, now);
        Ok(())
    }

    /// Starts a drag gesture at `point`.
    ///
    /// Returns `Ok(false)` if a move is in flight; the strip does not follow
    /// the pointer in that case.
    pub fn pointer_down(&mut self, point: Point, now: u64) -> Result<bool, CarouselError> {
        self.ensure_alive()?;
        if self.state != CarouselState::Idle {
            trace!(state = ?self.state, "pointer down ignored");
            return Ok(false);
        }
        self.drag.start(point, now);
        self.state = CarouselState::ManualDragging;
        self.restore_transition = false;
        self.viewport.set_transition(None);
        if let Some(id) = self.grace_timer.take() {
            self.timers.cancel(id);
        }
        let change = self.gate.hold(Suspension::INTERACTING);
        self.apply_gate(change, now);
        trace!(x = point.x, "drag started");
        Ok(true)
    }

    /// Feeds a pointer move during a drag.
    ///
    /// The strip offset is applied on the next [`on_frame`](Self::on_frame);
    /// moves arriving before then replace each other.
    pub fn pointer_move(&mut self, point: Point, now: u64) -> Result<bool, CarouselError> {
        self.ensure_alive()?;
        if self.state != CarouselState::ManualDragging {
            return Ok(false);
        }
        self.drag.update(point, now);
        let delta_x = self.drag.total_offset(point).map_or(0.0, |offset| offset.x);
        self.pending_offset = Some(drag_offset(
            self.position,
            delta_x,
            self.viewport.width(),
        ));
        self.frame.request();
        Ok(true)
    }

    /// Ends a drag at `point`, committing to a neighbor or reverting.
    ///
    /// Returns `Ok(None)` if no drag was active.
    pub fn pointer_up(
        &mut self,
        point: Point,
        now: u64,
    ) -> Result<Option<GestureOutcome>, CarouselError> {
        self.ensure_alive()?;
        if self.state != CarouselState::ManualDragging {
            return Ok(None);
        }
        self.drag.update(point, now);
        let Some(summary) = self.drag.end() else {
            self.events
                .emit(CarouselEvent::Recovered(Recovery::GestureInterrupted));
            self.revert_gesture(now);
            return Ok(Some(GestureOutcome::Revert));
        };
        let outcome = resolve_swipe(summary.offset.x, summary.velocity.x, &self.config);
        debug!(
            displacement = summary.offset.x,
            velocity = summary.velocity.x,
            ?outcome,
            "drag released"
        );
        match outcome {
            GestureOutcome::Commit(direction) => {
                self.pending_offset = None;
                let target = match direction {
                    Direction::Next => self.ring.forward(self.position),
                    Direction::Prev => self.ring.backward(self.position),
                };
                self.events.emit(CarouselEvent::GestureResolved(outcome));
                self.begin_transition(target, TransitionCause::Swipe(direction), now);
                self.schedule_resume(now);
            }
            GestureOutcome::Revert => self.revert_gesture(now),
        }
        Ok(Some(outcome))
    }

    /// Aborts a drag, for example when pointer capture is lost.
    ///
    /// The gesture is reverted. Returns `Ok(false)` if no drag was active.
    pub fn pointer_cancel(&mut self, now: u64) -> Result<bool, CarouselError> {
        self.ensure_alive()?;
        if self.state != CarouselState::ManualDragging {
            return Ok(false);
        }
        self.drag.end();
        warn!("drag interrupted; reverting");
        self.events
            .emit(CarouselEvent::Recovered(Recovery::GestureInterrupted));
        self.revert_gesture(now);
        Ok(true)
    }

    /// Tears the controller down.
    ///
    /// Cancels the pending frame and every timer, drops listeners, and leaves
    /// the strip resting on a real slide with animation disabled. Calling it
    /// again does nothing.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.frame.cancel();
        self.timers.clear();
        self.auto_timer = None;
        self.timeout_timer = None;
        self.grace_timer = None;
        self.events.clear();
        self.drag.end();
        self.pending_offset = None;
        self.restore_transition = false;
        self.transition = None;
        self.position = self.ring.settle(self.position);
        self.displayed = self.ring.real_index(self.position);
        self.state = CarouselState::Idle;
        self.viewport.set_transition(None);
        self.viewport.set_offset(resting_offset(self.position));
        self.destroyed = true;
        debug!(position = self.position, "carousel destroyed");
    }

    fn begin_transition(&mut self, target: usize, cause: TransitionCause, now: u64) {
        let from = self.displayed;
        let to = self.ring.real_index(target);
        let id = TransitionId::new(self.next_transition);
        self.next_transition += 1;
        self.transition = Some(id);
        self.position = target;
        self.state = if cause == TransitionCause::AutoAdvance {
            CarouselState::AutoAdvancing
        } else {
            CarouselState::Transitioning
        };
        self.restore_transition = false;
        self.viewport.set_transition(Some(self.config.transition()));
        self.viewport.set_offset(resting_offset(target));
        if let Some(id) = self.timeout_timer.take() {
            self.timers.cancel(id);
        }
        self.timeout_timer = Some(self.timers.schedule_after(
            now,
            self.config.transition_timeout_ms(),
            Job::TransitionTimeout,
        ));
        debug!(id = id.get(), from, to, position = target, ?cause, "transition started");
        self.events.emit(CarouselEvent::TransitionStarted {
            id,
            from,
            to,
            cause,
        });
        if to != from {
            self.displayed = to;
            self.events
                .emit(CarouselEvent::SlideChanged { index: to, previous: from });
        }
    }

    fn teleport(&mut self) {
        let from = self.position;
        let to = self.ring.settle(from);
        self.viewport.set_transition(None);
        self.viewport.set_offset(resting_offset(to));
        self.position = to;
        self.restore_transition = true;
        self.frame.request();
        trace!(from, to, "teleported");
        self.events.emit(CarouselEvent::Teleported { from, to });
    }

    fn settle(&mut self) {
        if let Some(id) = self.timeout_timer.take() {
            self.timers.cancel(id);
        }
        self.state = CarouselState::Idle;
        self.transition = None;
        let index = self.current_index();
        self.events.emit(CarouselEvent::Settled { index });
    }

    fn recover_from_timeout(&mut self) {
        warn!(position = self.position, "transition did not complete; snapping");
        let target = self.ring.settle(self.position);
        self.viewport.set_transition(None);
        self.viewport.set_offset(resting_offset(target));
        self.position = target;
        self.displayed = self.ring.real_index(target);
        self.restore_transition = true;
        self.frame.request();
        self.state = CarouselState::Idle;
        self.transition = None;
        self.events
            .emit(CarouselEvent::Recovered(Recovery::TransitionTimeout));
        self.events.emit(CarouselEvent::Settled {
            index: self.displayed,
        });
    }

    fn revert_gesture(&mut self, now: u64) {
        self.pending_offset = None;
        self.state = CarouselState::Idle;
        self.viewport.set_transition(Some(self.config.transition()));
        self.viewport.set_offset(resting_offset(self.position));
        self.events
            .emit(CarouselEvent::GestureResolved(GestureOutcome::Revert));
        self.schedule_resume(now);
    }

    fn schedule_resume(&mut self, now: u64) {
        if self.config.resume_grace_ms == 0 {
            let change = self.gate.release(Suspension::INTERACTING);
            self.apply_gate(change, now);
            return;
        }
        if let Some(id) = self.grace_timer.take() {
            self.timers.cancel(id);
        }
        self.grace_timer = Some(self.timers.schedule_after(
            now,
            self.config.resume_grace_ms,
            Job::ResumeAfterGesture,
        ));
    }

    fn arm_auto_advance(&mut self, now: u64) {
        if let Some(id) = self.auto_timer.take() {
            self.timers.cancel(id);
        }
        self.auto_timer = Some(self.timers.schedule_repeating(
            now,
            self.config.auto_advance_interval_ms,
            Job::AutoAdvance,
        ));
    }

    fn apply_gate(&mut self, change: Option<GateChange>, now: u64) {
        match change {
            Some(GateChange::Suspended) => {
                if let Some(id) = self.auto_timer.take() {
                    self.timers.cancel(id);
                }
                debug!(reasons = ?self.gate.reasons(), "auto-advance suspended");
                self.events
                    .emit(CarouselEvent::AutoAdvance(AutoAdvanceStatus::Suspended));
            }
            Some(GateChange::Resumed) => {
                self.arm_auto_advance(now);
                debug!("auto-advance resumed");
                self.events
                    .emit(CarouselEvent::AutoAdvance(AutoAdvanceStatus::Running));
            }
            None => {}
        }
    }
}

impl<S, V: Viewport> Drop for Carousel<S, V> {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CarouselConfig {
        CarouselConfig::default()
            .with_drag_threshold_px(50.0)
            .with_velocity_threshold(0.5)
    }

    #[test]
    fn small_slow_drag_reverts() {
        assert_eq!(resolve_swipe(-30.0, -0.2, &config()), GestureOutcome::Revert);
        assert_eq!(resolve_swipe(30.0, 0.2, &config()), GestureOutcome::Revert);
    }

    #[test]
    fn threshold_must_be_exceeded() {
        assert_eq!(resolve_swipe(-50.0, 0.0, &config()), GestureOutcome::Revert);
        assert_eq!(
            resolve_swipe(-50.5, 0.0, &config()),
            GestureOutcome::Commit(Direction::Next)
        );
    }

    #[test]
    fn distance_alone_commits() {
        assert_eq!(
            resolve_swipe(-80.0, -0.1, &config()),
            GestureOutcome::Commit(Direction::Next)
        );
        assert_eq!(
            resolve_swipe(80.0, 0.1, &config()),
            GestureOutcome::Commit(Direction::Prev)
        );
    }

    #[test]
    fn velocity_alone_commits() {
        assert_eq!(
            resolve_swipe(-10.0, -1.2, &config()),
            GestureOutcome::Commit(Direction::Next)
        );
    }

    #[test]
    fn displacement_sign_beats_velocity_sign() {
        // Finger ended with a jitter back to the right, but moved left overall.
        assert_eq!(
            resolve_swipe(-4.0, 2.0, &config()),
            GestureOutcome::Commit(Direction::Next)
        );
    }

    #[test]
    fn zero_displacement_reverts_even_when_fast() {
        assert_eq!(resolve_swipe(0.0, 5.0, &config()), GestureOutcome::Revert);
        assert_eq!(resolve_swipe(f64::NAN, 5.0, &config()), GestureOutcome::Revert);
    }

    #[test]
    fn transitioning_states() {
        assert!(CarouselState::Transitioning.is_transitioning());
        assert!(CarouselState::AutoAdvancing.is_transitioning());
        assert!(!CarouselState::Idle.is_transitioning());
        assert!(!CarouselState::ManualDragging.is_transitioning());
    }
}
