// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the carousel demos.
//!
//! The demos run without a window: a [`SimulatedHost`] plays the part of a
//! browser or toolkit by advancing a virtual clock, delivering animation
//! frames and transition-end notifications, and firing timers when they fall
//! due. Everything the carousel asks the host to draw is logged through
//! `tracing`.

use std::fs;
use std::path::Path;

use kurbo::Point;
use tracing::{debug, info, warn};
use understory_carousel::{
    Carousel, CarouselConfig, ConfigError, Transition, TransitionId, Viewport,
};

/// Installs a `fmt` subscriber honoring `RUST_LOG`.
///
/// Without `RUST_LOG`, carousel internals are shown at `debug` and everything
/// else at `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,understory_carousel=debug".into()),
        )
        .with_target(false)
        .init();
}

/// Failure to load a demo configuration file.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// The file could not be read.
    #[error("reading config: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid configuration document.
    #[error("parsing config: {0}")]
    Json(#[from] serde_json::Error),
    /// The configuration parsed but is malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Loads a JSON [`CarouselConfig`] from `path`, or the defaults when `None`.
///
/// Missing fields keep their default values.
pub fn load_config(path: Option<&Path>) -> Result<CarouselConfig, DemoError> {
    let Some(path) = path else {
        return Ok(CarouselConfig::default());
    };
    let text = fs::read_to_string(path)?;
    let config: CarouselConfig = serde_json::from_str(&text)?;
    config.validate()?;
    info!(path = %path.display(), "loaded carousel config");
    Ok(config)
}

/// A viewport that logs what a real host would draw.
#[derive(Debug)]
pub struct LoggingViewport {
    width: f64,
    offset: f64,
    animated: bool,
}

impl LoggingViewport {
    /// A viewport `width` logical pixels wide.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            offset: 0.0,
            animated: false,
        }
    }

    /// Last offset, in percent of the width.
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Viewport for LoggingViewport {
    fn width(&self) -> f64 {
        self.width
    }

    fn set_transition(&mut self, transition: Option<Transition>) {
        self.animated = transition.is_some();
        debug!(?transition, "viewport transition");
    }

    fn set_offset(&mut self, percent: f64) {
        self.offset = percent;
        info!(percent, animated = self.animated, "viewport offset");
    }
}

/// Plays the host side of the carousel contract against a virtual clock.
#[derive(Debug)]
pub struct SimulatedHost<S> {
    carousel: Carousel<S, LoggingViewport>,
    now: u64,
    transition_end: Option<(u64, TransitionId)>,
}

impl<S> SimulatedHost<S> {
    /// Wraps a carousel built at time `now`.
    pub fn new(carousel: Carousel<S, LoggingViewport>, now: u64) -> Self {
        Self {
            carousel,
            now,
            transition_end: None,
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// The carousel under simulation.
    pub fn carousel(&self) -> &Carousel<S, LoggingViewport> {
        &self.carousel
    }

    /// Mutable access for issuing commands at [`now`](Self::now).
    pub fn carousel_mut(&mut self) -> &mut Carousel<S, LoggingViewport> {
        &mut self.carousel
    }

    /// Advances the clock to `until`, delivering every frame, transition end
    /// and timer that falls due on the way.
    pub fn run_until(&mut self, until: u64) {
        loop {
            self.pump();
            let end_at = self.transition_end.map(|(at, _)| at);
            let due = [self.carousel.next_deadline(), end_at]
                .into_iter()
                .flatten()
                .min()
                .filter(|&t| t <= until);
            let Some(t) = due else {
                self.now = self.now.max(until);
                self.pump();
                return;
            };
            self.now = self.now.max(t);
            if end_at == Some(t) {
                if let Some((_, id)) = self.transition_end.take() {
                    self.carousel.on_transition_end(id);
                }
            } else {
                self.carousel.tick(self.now);
            }
        }
    }

    /// Drags horizontally from `from_x` to `to_x` over `duration_ms`, one
    /// pointer sample per `step_ms`, delivering a frame after every sample.
    pub fn drag(&mut self, from_x: f64, to_x: f64, duration_ms: u64, step_ms: u64) {
        let step_ms = step_ms.max(1);
        let start = self.now;
        if !matches!(
            self.carousel.pointer_down(Point::new(from_x, 0.0), start),
            Ok(true)
        ) {
            info!("drag refused");
            return;
        }
        let mut elapsed = 0;
        while elapsed < duration_ms {
            elapsed = (elapsed + step_ms).min(duration_ms);
            let t = elapsed as f64 / duration_ms as f64;
            let x = from_x + (to_x - from_x) * t;
            self.now = start + elapsed;
            match self.carousel.pointer_move(Point::new(x, 0.0), self.now) {
                Ok(true) => {}
                Ok(false) => debug!(x, "pointer move ignored"),
                Err(err) => {
                    warn!(%err, "pointer move failed");
                    return;
                }
            }
            self.pump();
        }
        match self.carousel.pointer_up(Point::new(to_x, 0.0), self.now) {
            Ok(Some(outcome)) => info!(?outcome, "drag released"),
            Ok(None) => debug!("pointer up ignored"),
            Err(err) => warn!(%err, "pointer up failed"),
        }
        self.pump();
    }

    fn pump(&mut self) {
        if self.carousel.wants_frame() {
            self.carousel.on_frame();
        }
        match self.carousel.transition_id() {
            Some(id) if !self.carousel.wants_frame() => {
                if self.transition_end.is_none_or(|(_, pending)| pending != id) {
                    let at = self.now + self.carousel.config().transition_duration_ms;
                    self.transition_end = Some((at, id));
                }
            }
            Some(_) => {}
            None => self.transition_end = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_carousel::CarouselState;

    fn host() -> SimulatedHost<usize> {
        let config = CarouselConfig::default().with_auto_advance_interval_ms(60_000);
        let carousel = Carousel::builder(0..3)
            .viewport(LoggingViewport::new(400.0))
            .config(config)
            .build(0)
            .unwrap();
        SimulatedHost::new(carousel, 0)
    }

    #[test]
    fn long_drag_commits_and_settles() {
        let mut host = host();
        host.drag(300.0, 200.0, 160, 16);
        assert_eq!(host.now(), 160);
        host.run_until(2_000);
        assert_eq!(host.carousel().state(), CarouselState::Idle);
        assert_eq!(host.carousel().current_index(), 1);
    }

    #[test]
    fn drag_during_a_move_is_refused() {
        let mut host = host();
        host.carousel_mut().next(0).unwrap();
        host.drag(300.0, 200.0, 160, 16);
        assert_eq!(host.now(), 0);
        assert_eq!(host.carousel().state(), CarouselState::Transitioning);
        host.run_until(2_000);
        assert_eq!(host.carousel().current_index(), 1);
    }

    #[test]
    fn wrap_around_teleports_after_the_move() {
        let mut host = host();
        host.carousel_mut().prev(0).unwrap();
        host.run_until(599);
        assert_eq!(host.carousel().position(), 0);
        host.run_until(600);
        assert_eq!(host.carousel().position(), 3);
        assert_eq!(host.carousel().state(), CarouselState::Idle);
        assert_eq!(host.carousel().viewport().offset(), -300.0);
    }
}
