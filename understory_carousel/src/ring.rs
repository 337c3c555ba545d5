// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide ring: real slides bracketed by two sentinel clones.
//!
//! For `N` slides the ring has `N + 2` positions:
//!
//! ```text
//! position:  0        1    2   ...   N        N + 1
//! shows:     N - 1    0    1   ...   N - 1    0
//!            (clone)                          (clone)
//! ```
//!
//! Moving from position `N` to `N + 1` looks exactly like moving from the last
//! slide to the first. Once that move has finished, the controller jumps from
//! `N + 1` back to `1` without animation and the loop appears seamless. The
//! clones are descriptors pointing at real slides; payloads are never copied.

use alloc::vec::Vec;

use crate::error::InitError;

/// A real slide: its payload plus its index in `0..N`.
#[derive(Debug, PartialEq, Eq)]
pub struct Slide<'a, S> {
    /// Index among the real slides.
    pub index: usize,
    /// Host-provided payload.
    pub payload: &'a S,
}

impl<S> Clone for Slide<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Slide<'_, S> {}

/// One position of the ring.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RingEntry {
    /// Position in `0..=N + 1`.
    pub position: usize,
    /// Real slide shown at this position.
    pub slide: usize,
    /// `true` for the two boundary clones.
    pub clone: bool,
}

/// The real slides and their boundary clones.
#[derive(Clone, Debug)]
pub struct SlideRing<S> {
    slides: Vec<S>,
}

impl<S> SlideRing<S> {
    /// Builds a ring, failing on an empty slide list.
    pub fn new(slides: Vec<S>) -> Result<Self, InitError> {
        if slides.is_empty() {
            return Err(InitError::NoSlides);
        }
        Ok(Self { slides })
    }

    /// Number of real slides, `N`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; a ring holds at least one slide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Number of positions including clones, `N + 2`.
    #[must_use]
    pub fn ring_len(&self) -> usize {
        self.len() + 2
    }

    /// Position of the trailing clone, `N + 1`.
    #[must_use]
    pub fn last_position(&self) -> usize {
        self.len() + 1
    }

    /// Real payloads in order.
    #[must_use]
    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    /// Real slide at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Slide<'_, S>> {
        self.slides.get(index).map(|payload| Slide { index, payload })
    }

    /// Real slide index displayed at `position`.
    ///
    /// Positions past the trailing clone are clamped to it.
    #[must_use]
    pub fn real_index(&self, position: usize) -> usize {
        let n = self.len();
        match position {
            0 => n - 1,
            p if p > n => 0,
            p => p - 1,
        }
    }

    /// Resting position of real slide `index`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<usize> {
        (index < self.len()).then_some(index + 1)
    }

    /// Returns `true` for the two clone positions.
    #[must_use]
    pub fn is_boundary(&self, position: usize) -> bool {
        position == 0 || position >= self.last_position()
    }

    /// The non-clone position showing the same slide as `position`.
    ///
    /// Boundaries map to the real slide they mirror; every other position maps
    /// to itself.
    #[must_use]
    pub fn settle(&self, position: usize) -> usize {
        let n = self.len();
        match position {
            0 => n,
            p if p > n => 1,
            p => p,
        }
    }

    /// One step forward, stopping at the trailing clone.
    #[must_use]
    pub fn forward(&self, position: usize) -> usize {
        (position + 1).min(self.last_position())
    }

    /// One step back, stopping at the leading clone.
    #[must_use]
    pub fn backward(&self, position: usize) -> usize {
        position.saturating_sub(1)
    }

    /// Entry at `position`.
    #[must_use]
    pub fn entry(&self, position: usize) -> Option<RingEntry> {
        (position < self.ring_len()).then(|| RingEntry {
            position,
            slide: self.real_index(position),
            clone: self.is_boundary(position),
        })
    }

    /// All `N + 2` entries in display order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = RingEntry> + '_ {
        (0..self.ring_len()).map(|position| RingEntry {
            position,
            slide: self.real_index(position),
            clone: self.is_boundary(position),
        })
    }

    /// Payload rendered for `entry`, or `None` if the entry does not belong
    /// to this ring.
    #[must_use]
    pub fn payload(&self, entry: RingEntry) -> Option<&S> {
        self.slides.get(entry.slide)
    }
}
