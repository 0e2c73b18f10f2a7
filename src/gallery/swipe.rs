// SPDX-License-Identifier: MPL-2.0
//! Horizontal touch swipe detection.

/// Direction of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved towards the left edge (shows the next image).
    Left,
    /// Finger moved towards the right edge (shows the previous image).
    Right,
}

/// Tracks one finger from press to lift.
///
/// Only horizontal travel counts, and it must be strictly greater than the
/// threshold. Touches of other fingers while one is tracked are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    start: Option<(u64, f32)>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Records where `finger` touched down.
    pub fn begin(&mut self, finger: u64, x: f32) {
        if self.start.is_none() {
            self.start = Some((finger, x));
        }
    }

    /// Finishes the gesture of `finger` and classifies it.
    pub fn end(&mut self, finger: u64, x: f32) -> Option<SwipeDirection> {
        let (tracked, start_x) = self.start?;
        if tracked != finger {
            return None;
        }
        self.start = None;

        if x < start_x - self.threshold {
            Some(SwipeDirection::Left)
        } else if x > start_x + self.threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    /// Forgets an interrupted gesture.
    pub fn cancel(&mut self, finger: u64) {
        if matches!(self.start, Some((tracked, _)) if tracked == finger) {
            self.start = None;
        }
    }
}
