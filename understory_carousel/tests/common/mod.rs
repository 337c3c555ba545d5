// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for carousel integration tests.

#![allow(dead_code, reason = "Not every test binary uses every helper")]

use understory_carousel::{
    Carousel, CarouselConfig, CarouselEvent, InitError, Transition, Viewport,
};

/// One call made on the viewport.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Transition(Option<Transition>),
    Offset(f64),
}

/// Viewport that records every call.
#[derive(Debug)]
pub struct RecordingViewport {
    pub width: f64,
    pub offset: f64,
    pub transition: Option<Transition>,
    pub ops: Vec<Op>,
}

impl RecordingViewport {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            offset: 0.0,
            transition: None,
            ops: Vec::new(),
        }
    }

    pub fn offsets(&self) -> Vec<f64> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Offset(o) => Some(*o),
                Op::Transition(_) => None,
            })
            .collect()
    }
}

impl Viewport for RecordingViewport {
    fn width(&self) -> f64 {
        self.width
    }

    fn set_transition(&mut self, transition: Option<Transition>) {
        self.transition = transition;
        self.ops.push(Op::Transition(transition));
    }

    fn set_offset(&mut self, percent: f64) {
        self.offset = percent;
        self.ops.push(Op::Offset(percent));
    }
}

pub type TestCarousel = Carousel<usize, RecordingViewport>;

/// Test configuration: 4 s interval, 600 ms moves, 50 px / 0.5 px·ms⁻¹ thresholds.
pub fn config() -> CarouselConfig {
    CarouselConfig::default()
        .with_auto_advance_interval_ms(4_000)
        .with_transition_duration_ms(600)
        .with_drag_threshold_px(50.0)
        .with_velocity_threshold(0.5)
        .with_visibility_threshold(0.3)
        .with_resume_grace_ms(1_000)
}

pub fn try_build(n: usize, config: CarouselConfig) -> Result<TestCarousel, InitError> {
    Carousel::builder(0..n)
        .viewport(RecordingViewport::new(400.0))
        .config(config)
        .build(0)
}

pub fn build(n: usize) -> TestCarousel {
    try_build(n, config()).unwrap()
}

/// Completes the in-flight move, including the teleport frame if one is needed.
pub fn finish(carousel: &mut TestCarousel) {
    if let Some(id) = carousel.transition_id() {
        carousel.on_transition_end(id);
    }
    if carousel.wants_frame() {
        carousel.on_frame();
    }
}

pub fn slide_changes(events: &[CarouselEvent]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|e| match e {
            CarouselEvent::SlideChanged { index, .. } => Some(*index),
            _ => None,
        })
        .collect()
}
