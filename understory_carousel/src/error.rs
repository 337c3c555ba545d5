// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Only construction failures and misuse of a torn-down controller are
//! errors. Faults that happen while the carousel runs (a cancelled gesture, a
//! transition that never reports completion) are corrected locally and
//! reported as [`CarouselEvent::Recovered`](crate::CarouselEvent::Recovered).

use thiserror::Error;

use crate::config::ConfigError;

/// Construction of a [`Carousel`](crate::Carousel) failed.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum InitError {
    /// The slide list was empty.
    #[error("a carousel needs at least one slide")]
    NoSlides,
    /// No viewport was supplied to the builder.
    #[error("no viewport was supplied")]
    MissingViewport,
    /// The viewport reported an unusable width.
    #[error("viewport width must be finite and positive (got {width})")]
    InvalidViewport {
        /// Width reported by the viewport.
        width: f64,
    },
    /// The configuration failed validation.
    #[error("invalid carousel configuration")]
    InvalidConfig(#[from] ConfigError),
}

/// A carousel operation could not be performed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// The controller was destroyed.
    #[error("the carousel has been destroyed")]
    Destroyed,
    /// A slide index outside `0..len` was requested.
    #[error("slide index {index} is out of range for {len} slides")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of real slides.
        len: usize,
    },
}
