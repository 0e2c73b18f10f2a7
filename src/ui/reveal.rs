// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered reveal of home screen blocks.
//!
//! Each block has a vertical extent inside the scrollable content. A block is
//! revealed the first time at least `threshold` of its height intersects the
//! viewport, and stays revealed afterwards.

/// Vertical position of a block within the scrolled content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f32,
    pub height: f32,
}

impl Extent {
    /// Fraction of this extent visible in `[viewport_top, viewport_top + viewport_height)`.
    #[must_use]
    pub fn visible_fraction(self, viewport_top: f32, viewport_height: f32) -> f32 {
        let bottom = self.top + self.height;
        let viewport_bottom = viewport_top + viewport_height;

        if self.height <= 0.0 {
            let inside = self.top >= viewport_top && self.top < viewport_bottom;
            return if inside { 1.0 } else { 0.0 };
        }

        let overlap = bottom.min(viewport_bottom) - self.top.max(viewport_top);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    extents: Vec<Extent>,
    revealed: Vec<bool>,
    threshold: f32,
}

impl RevealTracker {
    #[must_use]
    pub fn new(extents: Vec<Extent>, threshold: f32) -> Self {
        let revealed = vec![false; extents.len()];
        Self {
            extents,
            revealed,
            threshold,
        }
    }

    /// Stacks blocks of the given heights with `gap` between them.
    #[must_use]
    pub fn stacked(heights: &[f32], gap: f32, start: f32, threshold: f32) -> Self {
        let mut top = start;
        let extents = heights
            .iter()
            .map(|&height| {
                let extent = Extent { top, height };
                top += height + gap;
                extent
            })
            .collect();
        Self::new(extents, threshold)
    }

    /// Reveals blocks intersecting the viewport. Returns how many were newly
    /// revealed.
    pub fn observe(&mut self, viewport_top: f32, viewport_height: f32) -> usize {
        let mut newly = 0;
        for (extent, revealed) in self.extents.iter().zip(self.revealed.iter_mut()) {
            if *revealed {
                continue;
            }
            if extent.visible_fraction(viewport_top, viewport_height) >= self.threshold {
                *revealed = true;
                newly += 1;
            }
        }
        newly
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// True once nothing is left to observe.
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|revealed| *revealed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }
}
