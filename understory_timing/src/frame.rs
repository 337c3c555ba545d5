// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coalescing animation-frame request.

/// A single pending "render on the next frame" request.
///
/// Any number of [`request`](Self::request) calls between two frames collapse
/// into one; the host checks [`is_requested`](Self::is_requested) to decide
/// whether to schedule a platform frame callback and then calls
/// [`take`](Self::take) when that callback runs.
///
/// ```rust
/// use understory_timing::FrameRequest;
///
/// let mut frame = FrameRequest::default();
/// assert!(frame.request());
/// assert!(!frame.request()); // Already pending.
/// assert!(frame.take());
/// assert!(!frame.take());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameRequest {
    pending: bool,
}

impl FrameRequest {
    /// Requests a frame. Returns `true` if no frame was pending before.
    pub fn request(&mut self) -> bool {
        !core::mem::replace(&mut self.pending, true)
    }

    /// Returns `true` while a frame is pending.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.pending
    }

    /// Consumes the pending request. Returns `true` if one was pending.
    pub fn take(&mut self) -> bool {
        core::mem::replace(&mut self.pending, false)
    }

    /// Drops any pending request without running it.
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_requests_coalesce() {
        let mut frame = FrameRequest::default();
        assert!(frame.request());
        assert!(!frame.request());
        assert!(!frame.request());
        assert!(frame.is_requested());
        assert!(frame.take());
        assert!(!frame.is_requested());
    }

    #[test]
    fn cancel_discards_pending_frame() {
        let mut frame = FrameRequest::default();
        frame.request();
        frame.cancel();
        assert!(!frame.take());
    }
}
