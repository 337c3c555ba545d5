// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pagination indicators ("dots").

/// State of one pagination indicator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Indicator {
    /// Real slide index the indicator stands for.
    pub index: usize,
    /// `true` for the slide currently displayed.
    pub active: bool,
}

/// Iterator over the indicators of a carousel, one per real slide.
///
/// While the ring is moving onto a boundary clone, the indicator of the slide
/// that clone mirrors is the active one.
#[derive(Clone, Debug)]
pub struct Indicators {
    next: usize,
    len: usize,
    active: usize,
}

impl Indicators {
    pub(crate) fn new(len: usize, active: usize) -> Self {
        Self {
            next: 0,
            len,
            active,
        }
    }
}

impl Iterator for Indicators {
    type Item = Indicator;

    fn next(&mut self) -> Option<Indicator> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(Indicator {
            index,
            active: index == self.active,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Indicators {}

impl core::iter::FusedIterator for Indicators {}
