// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.

use thiserror::Error;

/// Timing curve applied to animated moves.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// CSS-style cubic Bézier with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier {
        /// First control point, x.
        x1: f64,
        /// First control point, y.
        y1: f64,
        /// Second control point, x.
        x2: f64,
        /// Second control point, y.
        y2: f64,
    },
}

impl Easing {
    /// Symmetric ease-in-out used for slide moves.
    pub const EASE_IN_OUT: Self = Self::CubicBezier {
        x1: 0.65,
        y1: 0.0,
        x2: 0.35,
        y2: 1.0,
    };
}

impl Default for Easing {
    fn default() -> Self {
        Self::EASE_IN_OUT
    }
}

/// An animated move as handed to the [`Viewport`](crate::Viewport).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the move in milliseconds.
    pub duration_ms: u64,
    /// Timing curve.
    pub easing: Easing,
}

/// Tunables for a [`Carousel`](crate::Carousel).
///
/// Durations are host milliseconds, distances are logical pixels and the
/// velocity threshold is in logical pixels per millisecond.
///
/// ```
/// use understory_carousel::CarouselConfig;
///
/// let config = CarouselConfig::default()
///     .with_auto_advance_interval_ms(4_000)
///     .with_drag_threshold_px(40.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct CarouselConfig {
    /// Period of the auto-advance timer.
    pub auto_advance_interval_ms: u64,
    /// Duration of one animated move.
    pub transition_duration_ms: u64,
    /// A drag whose net displacement exceeds this distance commits.
    pub drag_threshold_px: f64,
    /// A drag whose release velocity exceeds this speed commits.
    pub velocity_threshold: f64,
    /// Minimum visible fraction, in `(0, 1]`, for the carousel to count as in view.
    pub visibility_threshold: f64,
    /// Delay after a gesture ends before auto-advance resumes.
    pub resume_grace_ms: u64,
    /// A transition that has not reported completion after
    /// `timeout_factor × transition_duration_ms` is forcibly settled.
    pub timeout_factor: u32,
    /// Timing curve for animated moves.
    pub easing: Easing,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_interval_ms: 7_000,
            transition_duration_ms: 600,
            drag_threshold_px: 50.0,
            velocity_threshold: 0.5,
            visibility_threshold: 0.3,
            resume_grace_ms: 1_000,
            timeout_factor: 2,
            easing: Easing::default(),
        }
    }
}

impl CarouselConfig {
    /// Sets [`auto_advance_interval_ms`](Self::auto_advance_interval_ms).
    #[must_use]
    pub fn with_auto_advance_interval_ms(mut self, ms: u64) -> Self {
        self.auto_advance_interval_ms = ms;
        self
    }

    /// Sets [`transition_duration_ms`](Self::transition_duration_ms).
    #[must_use]
    pub fn with_transition_duration_ms(mut self, ms: u64) -> Self {
        self.transition_duration_ms = ms;
        self
    }

    /// Sets [`drag_threshold_px`](Self::drag_threshold_px).
    #[must_use]
    pub fn with_drag_threshold_px(mut self, px: f64) -> Self {
        self.drag_threshold_px = px;
        self
    }

    /// Sets [`velocity_threshold`](Self::velocity_threshold).
    #[must_use]
    pub fn with_velocity_threshold(mut self, px_per_ms: f64) -> Self {
        self.velocity_threshold = px_per_ms;
        self
    }

    /// Sets [`visibility_threshold`](Self::visibility_threshold).
    #[must_use]
    pub fn with_visibility_threshold(mut self, fraction: f64) -> Self {
        self.visibility_threshold = fraction;
        self
    }

    /// Sets [`resume_grace_ms`](Self::resume_grace_ms).
    #[must_use]
    pub fn with_resume_grace_ms(mut self, ms: u64) -> Self {
        self.resume_grace_ms = ms;
        self
    }

    /// Sets [`timeout_factor`](Self::timeout_factor).
    #[must_use]
    pub fn with_timeout_factor(mut self, factor: u32) -> Self {
        self.timeout_factor = factor;
        self
    }

    /// Sets [`easing`](Self::easing).
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The animated move used for every slide change.
    #[must_use]
    pub fn transition(&self) -> Transition {
        Transition {
            duration_ms: self.transition_duration_ms,
            easing: self.easing,
        }
    }

    /// How long a transition may run before it is forcibly settled.
    #[must_use]
    pub fn transition_timeout_ms(&self) -> u64 {
        self.transition_duration_ms
            .saturating_mul(u64::from(self.timeout_factor))
    }

    /// Checks every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auto_advance_interval_ms == 0 {
            return Err(ConfigError::ZeroAutoAdvanceInterval);
        }
        if self.transition_duration_ms == 0 {
            return Err(ConfigError::ZeroTransitionDuration);
        }
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            return Err(ConfigError::InvalidDragThreshold(self.drag_threshold_px));
        }
        if !self.velocity_threshold.is_finite() || self.velocity_threshold < 0.0 {
            return Err(ConfigError::InvalidVelocityThreshold(
                self.velocity_threshold,
            ));
        }
        if !(self.visibility_threshold > 0.0 && self.visibility_threshold <= 1.0) {
            return Err(ConfigError::InvalidVisibilityThreshold(
                self.visibility_threshold,
            ));
        }
        if self.timeout_factor == 0 {
            return Err(ConfigError::ZeroTimeoutFactor);
        }
        Ok(())
    }
}

/// A malformed [`CarouselConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// `auto_advance_interval_ms` is zero.
    #[error("auto-advance interval must be positive")]
    ZeroAutoAdvanceInterval,
    /// `transition_duration_ms` is zero.
    #[error("transition duration must be positive")]
    ZeroTransitionDuration,
    /// `drag_threshold_px` is negative or not finite.
    #[error("drag threshold must be a finite, non-negative distance (got {0})")]
    InvalidDragThreshold(f64),
    /// `velocity_threshold` is negative or not finite.
    #[error("velocity threshold must be a finite, non-negative speed (got {0})")]
    InvalidVelocityThreshold(f64),
    /// `visibility_threshold` is outside `(0, 1]`.
    #[error("visibility threshold must be in (0, 1] (got {0})")]
    InvalidVisibilityThreshold(f64),
    /// `timeout_factor` is zero.
    #[error("transition timeout factor must be at least 1")]
    ZeroTimeoutFactor,
}
