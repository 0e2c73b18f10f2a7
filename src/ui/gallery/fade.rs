// SPDX-License-Identifier: MPL-2.0
//! Opacity transitions of the lightbox.
//!
//! The lightbox model only knows target states (shown, hidden). [`Fade`]
//! interpolates between them over time so the view can render intermediate
//! frames while the subscription ticks.

use crate::gallery::{Lightbox, Phase};
use std::time::{Duration, Instant};

/// Linear opacity transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl Fade {
    /// A fade already resting at `value`.
    #[must_use]
    pub fn settled(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Opacity at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        let progress = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * progress
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.duration.is_zero() && now.saturating_duration_since(self.start) < self.duration
    }

    /// Heads towards `to` from the current value. Unchanged targets keep the
    /// running transition.
    pub fn retarget(&mut self, to: f32, duration: Duration, now: Instant) {
        if (self.to - to).abs() < f32::EPSILON {
            return;
        }
        *self = Self {
            from: self.value(now),
            to,
            start: now,
            duration,
        };
    }
}

/// Overlay and image opacities of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightboxFade {
    pub overlay: Fade,
    pub image: Fade,
}

impl LightboxFade {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            overlay: Fade::settled(0.0, now),
            image: Fade::settled(0.0, now),
        }
    }

    /// Follows the lightbox state after an update.
    ///
    /// The overlay fades in on open and out while closing. The image fades
    /// out while its source is about to be swapped.
    pub fn sync(&mut self, lightbox: &Lightbox, now: Instant) {
        let timing = lightbox.timing();
        let overlay = if lightbox.phase() == Some(Phase::Shown) {
            1.0
        } else {
            0.0
        };
        self.overlay.retarget(overlay, timing.fade_out, now);

        if lightbox.is_open() {
            let image = if lightbox.image_visible() { 1.0 } else { 0.0 };
            self.image.retarget(image, timing.swap_delay, now);
        } else {
            self.image = Fade::settled(0.0, now);
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.overlay.is_animating(now) || self.image.is_animating(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{ImageDescriptor, ImageSource, Timing};

    const STEP: Duration = Duration::from_millis(100);

    fn lightbox(n: usize) -> Lightbox {
        let images = (0..n)
            .map(|i| ImageDescriptor {
                source: ImageSource::Embedded(format!("{i}.svg")),
                alt: None,
                caption: None,
            })
            .collect();
        Lightbox::new(
            images,
            Timing {
                swap_delay: STEP,
                fade_out: STEP * 2,
                swipe_threshold: 50.0,
            },
        )
    }

    #[test]
    fn fade_interpolates_linearly() {
        let start = Instant::now();
        let mut fade = Fade::settled(0.0, start);
        fade.retarget(1.0, STEP * 2, start);

        assert!((fade.value(start + STEP) - 0.5).abs() < 1e-3);
        assert!(fade.is_animating(start + STEP));
        assert_eq!(fade.value(start + STEP * 3), 1.0);
        assert!(!fade.is_animating(start + STEP * 3));
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let start = Instant::now();
        let mut fade = Fade::settled(0.0, start);
        fade.retarget(1.0, STEP * 2, start);
        fade.retarget(0.0, STEP * 2, start + STEP);

        assert!((fade.value(start + STEP) - 0.5).abs() < 1e-3);
        assert!((fade.value(start + STEP * 2) - 0.25).abs() < 1e-3);
    }

    #[test]
    fn same_target_keeps_transition() {
        let start = Instant::now();
        let mut fade = Fade::settled(0.0, start);
        fade.retarget(1.0, STEP, start);
        let before = fade;
        fade.retarget(1.0, STEP, start + STEP / 2);
        assert_eq!(fade, before);
    }

    #[test]
    fn sync_follows_open_navigate_and_close() {
        let now = Instant::now();
        let mut lightbox = lightbox(3);
        let mut fade = LightboxFade::new(now);

        lightbox.open(0);
        fade.sync(&lightbox, now);
        assert_eq!(fade.overlay.target(), 1.0);
        assert_eq!(fade.image.target(), 1.0);

        lightbox.next();
        fade.sync(&lightbox, now);
        assert_eq!(fade.image.target(), 0.0);

        lightbox.close();
        fade.sync(&lightbox, now);
        assert_eq!(fade.overlay.target(), 0.0);
        assert!(fade.is_animating(now + STEP));
    }
}
