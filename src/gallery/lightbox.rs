// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller.
//!
//! The controller is a plain state machine with no knowledge of the GUI. Each
//! operation mutates the state and returns the [`Effect`]s the host must carry
//! out: lock or restore page scrolling, and schedule a [`Timer`] that comes
//! back through [`Lightbox::on_timer`].
//!
//! ```text
//!            open(i)                 close()               RemoveOverlay
//!  Closed ───────────▶ Shown ─────────────────▶ Closing ─────────────────▶ Closed
//!                       │ ▲                        │
//!          next()/prev()│ │SwapImage               │ next()/prev() still
//!                       ▼ │                        │ navigate until removal
//!                    (image hidden)
//! ```
//!
//! An overlay exists from `open` until its `RemoveOverlay` timer fires. While
//! it exists, `open` is rejected, the page is scroll-locked, and an
//! [`InputScope`] holds the keyboard focus and swipe state. Dropping the
//! session drops the scope, so no input binding outlives the overlay.

use super::swipe::{SwipeDirection, SwipeTracker};
use super::ImageDescriptor;
use crate::config::{
    GalleryConfig, DEFAULT_FADE_OUT_MS, DEFAULT_SWAP_DELAY_MS, DEFAULT_SWIPE_THRESHOLD_PX,
};
use std::time::Duration;

/// Identifies one overlay, from open to removal.
pub type SessionId = u64;

/// Delays and thresholds of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Time the displayed image stays hidden before its source is swapped.
    pub swap_delay: Duration,
    /// Time between starting the fade-out and removing the overlay.
    pub fade_out: Duration,
    /// Horizontal travel a swipe must exceed.
    pub swipe_threshold: f32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            swap_delay: Duration::from_millis(DEFAULT_SWAP_DELAY_MS),
            fade_out: Duration::from_millis(DEFAULT_FADE_OUT_MS),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl From<&GalleryConfig> for Timing {
    fn from(config: &GalleryConfig) -> Self {
        Self {
            swap_delay: config.swap_delay(),
            fade_out: config.fade_out(),
            swipe_threshold: config.swipe_threshold(),
        }
    }
}

/// Delayed continuation of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Show `index` in place of the hidden image.
    SwapImage { session: SessionId, index: usize },
    /// Remove the faded-out overlay.
    RemoveOverlay { session: SessionId },
}

/// Work the host performs on behalf of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Remember the page scroll position and stop the page from scrolling.
    LockScroll,
    /// Put the page scroll position back exactly as it was.
    RestoreScroll,
    /// Deliver `timer` to [`Lightbox::on_timer`] after `delay`.
    Schedule { timer: Timer, delay: Duration },
}

/// Lifecycle of an existing overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Faded in and interactive.
    Shown,
    /// Fading out, waiting for removal.
    Closing,
}

/// Focusable lightbox controls, in sequential navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Prev,
    Next,
    Close,
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed backdrop around the image.
    Background,
    /// The image itself (or its caption).
    Image,
    Control(Control),
}

/// Keyboard input understood while an overlay exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Escape,
    ArrowLeft,
    ArrowRight,
    /// `Tab`
    FocusNext,
    /// `Shift+Tab`
    FocusPrevious,
    /// `Enter` or `Space` on the focused control.
    Activate,
}

/// Input bindings that only exist while an overlay does.
#[derive(Debug, Clone, PartialEq)]
struct InputScope {
    focus: Option<Control>,
    swipe: SwipeTracker,
}

#[derive(Debug, Clone, PartialEq)]
struct Session {
    id: SessionId,
    /// Index selected by navigation.
    index: usize,
    /// Index of the image currently rendered; lags `index` during a swap.
    displayed: usize,
    image_visible: bool,
    phase: Phase,
    scope: InputScope,
}

/// Owns the open/closed state of the gallery overlay.
#[derive(Debug, Clone)]
pub struct Lightbox {
    images: Vec<ImageDescriptor>,
    timing: Timing,
    session: Option<Session>,
    last_session: SessionId,
}

impl Lightbox {
    #[must_use]
    pub fn new(images: Vec<ImageDescriptor>, timing: Timing) -> Self {
        Self {
            images,
            timing,
            session: None,
            last_session: 0,
        }
    }

    /// Replaces the images and drops any overlay. Session ids keep counting
    /// so timers scheduled before the reset stay stale.
    pub fn reset(&mut self, images: Vec<ImageDescriptor>, timing: Timing) {
        if let Some(session) = self.session.take() {
            tracing::debug!(session = session.id, "lightbox discarded by reset");
        }
        self.images = images;
        self.timing = timing;
    }

    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// True while an overlay exists, including during its fade-out.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.session.as_ref().map(|session| session.phase)
    }

    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|session| session.id)
    }

    /// Index selected by the last navigation.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(|session| session.index)
    }

    /// Index of the image the overlay currently renders.
    #[must_use]
    pub fn displayed_index(&self) -> Option<usize> {
        self.session.as_ref().map(|session| session.displayed)
    }

    /// Image the overlay currently renders.
    #[must_use]
    pub fn displayed(&self) -> Option<&ImageDescriptor> {
        self.displayed_index()
            .and_then(|index| self.images.get(index))
    }

    /// False while the displayed image is hidden for a swap.
    #[must_use]
    pub fn image_visible(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.image_visible)
    }

    /// Previous/next controls exist only with more than one image.
    #[must_use]
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    /// Controls present in the overlay, in sequential navigation order.
    #[must_use]
    pub fn controls(&self) -> &'static [Control] {
        if self.has_navigation() {
            &[Control::Prev, Control::Next, Control::Close]
        } else {
            &[Control::Close]
        }
    }

    #[must_use]
    pub fn focused(&self) -> Option<Control> {
        self.session.as_ref().and_then(|session| session.scope.focus)
    }

    /// Opens the overlay on `index`.
    ///
    /// Rejected (no state change, no effects) when the index is out of range
    /// or an overlay already exists, even one that is fading out.
    pub fn open(&mut self, index: usize) -> Vec<Effect> {
        if index >= self.images.len() {
            tracing::debug!(index, len = self.images.len(), "lightbox open out of range");
            return Vec::new();
        }
        if let Some(session) = &self.session {
            tracing::debug!(index, session = session.id, "lightbox already open");
            return Vec::new();
        }

        self.last_session += 1;
        self.session = Some(Session {
            id: self.last_session,
            index,
            displayed: index,
            image_visible: true,
            phase: Phase::Shown,
            scope: InputScope {
                focus: None,
                swipe: SwipeTracker::new(self.timing.swipe_threshold),
            },
        });
        tracing::debug!(index, session = self.last_session, "lightbox opened");

        vec![Effect::LockScroll]
    }

    /// Moves to the following image, wrapping to the first.
    pub fn next(&mut self) -> Vec<Effect> {
        self.navigate(1)
    }

    /// Moves to the preceding image, wrapping to the last.
    pub fn prev(&mut self) -> Vec<Effect> {
        let len = self.images.len();
        self.navigate(len.saturating_sub(1))
    }

    fn navigate(&mut self, step: usize) -> Vec<Effect> {
        let len = self.images.len();
        if len <= 1 {
            return Vec::new();
        }
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        session.index = (session.index + step) % len;
        session.image_visible = false;

        vec![Effect::Schedule {
            timer: Timer::SwapImage {
                session: session.id,
                index: session.index,
            },
            delay: self.timing.swap_delay,
        }]
    }

    /// Starts the fade-out. No-op when closed or already closing.
    pub fn close(&mut self) -> Vec<Effect> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if session.phase == Phase::Closing {
            return Vec::new();
        }

        session.phase = Phase::Closing;
        vec![Effect::Schedule {
            timer: Timer::RemoveOverlay {
                session: session.id,
            },
            delay: self.timing.fade_out,
        }]
    }

    /// Completes a delayed transition. Timers of removed overlays are ignored.
    pub fn on_timer(&mut self, timer: Timer) -> Vec<Effect> {
        match timer {
            Timer::SwapImage { session: id, index } => {
                if let Some(session) = self.session.as_mut().filter(|s| s.id == id) {
                    session.displayed = index;
                    session.image_visible = true;
                }
                Vec::new()
            }
            Timer::RemoveOverlay { session: id } => {
                let removable = self
                    .session
                    .as_ref()
                    .is_some_and(|s| s.id == id && s.phase == Phase::Closing);
                if !removable {
                    return Vec::new();
                }
                self.session = None;
                tracing::debug!(session = id, "lightbox removed");
                vec![Effect::RestoreScroll]
            }
        }
    }

    /// Handles a pointer press inside the overlay.
    pub fn pointer(&mut self, target: PointerTarget) -> Vec<Effect> {
        match target {
            PointerTarget::Background => self.close(),
            PointerTarget::Image => Vec::new(),
            PointerTarget::Control(control) => self.activate(control),
        }
    }

    /// Handles a key press. Ignored when no overlay exists.
    pub fn key(&mut self, command: KeyCommand) -> Vec<Effect> {
        if self.session.is_none() {
            return Vec::new();
        }
        match command {
            KeyCommand::Escape => self.close(),
            KeyCommand::ArrowLeft => self.prev(),
            KeyCommand::ArrowRight => self.next(),
            KeyCommand::FocusNext => {
                self.move_focus(true);
                Vec::new()
            }
            KeyCommand::FocusPrevious => {
                self.move_focus(false);
                Vec::new()
            }
            KeyCommand::Activate => match self.focused() {
                Some(control) => self.activate(control),
                None => Vec::new(),
            },
        }
    }

    fn activate(&mut self, control: Control) -> Vec<Effect> {
        match control {
            Control::Prev => self.prev(),
            Control::Next => self.next(),
            Control::Close => self.close(),
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let controls = self.controls();
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let position = session
            .scope
            .focus
            .and_then(|focus| controls.iter().position(|c| *c == focus));
        let target = match (position, forward) {
            (None, true) => 0,
            (None, false) => controls.len() - 1,
            (Some(pos), true) => (pos + 1) % controls.len(),
            (Some(pos), false) => (pos + controls.len() - 1) % controls.len(),
        };
        session.scope.focus = Some(controls[target]);
    }

    /// Records a finger touching the overlay.
    pub fn touch_start(&mut self, finger: u64, x: f32) {
        if let Some(session) = self.session.as_mut() {
            session.scope.swipe.begin(finger, x);
        }
    }

    /// Records a finger leaving the overlay and navigates on a swipe.
    pub fn touch_end(&mut self, finger: u64, x: f32) -> Vec<Effect> {
        let direction = self
            .session
            .as_mut()
            .and_then(|session| session.scope.swipe.end(finger, x));
        match direction {
            Some(SwipeDirection::Left) => self.next(),
            Some(SwipeDirection::Right) => self.prev(),
            None => Vec::new(),
        }
    }

    /// Forgets a touch the platform cancelled.
    pub fn touch_cancel(&mut self, finger: u64) {
        if let Some(session) = self.session.as_mut() {
            session.scope.swipe.cancel(finger);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::ImageSource;
    use proptest::prelude::*;

    fn image(name: &str, caption: Option<&str>) -> ImageDescriptor {
        ImageDescriptor {
            source: ImageSource::Embedded(format!("{name}.svg")),
            alt: Some(name.to_string()),
            caption: caption.map(str::to_string),
        }
    }

    fn gallery(len: usize) -> Lightbox {
        let images = (0..len).map(|i| image(&format!("img{i}"), None)).collect();
        Lightbox::new(images, Timing::default())
    }

    /// Runs every scheduled timer immediately, in order.
    fn settle(lightbox: &mut Lightbox, effects: Vec<Effect>) -> Vec<Effect> {
        let mut performed = Vec::new();
        for effect in effects {
            match effect {
                Effect::Schedule { timer, .. } => {
                    let follow_up = lightbox.on_timer(timer);
                    performed.extend(settle(lightbox, follow_up));
                }
                other => performed.push(other),
            }
        }
        performed
    }

    #[test]
    fn reset_keeps_earlier_timers_stale() {
        let mut lightbox = gallery(3);
        let _ = lightbox.open(0);
        let old = lightbox.session_id().expect("open");
        let _ = lightbox.next();

        let replacement = (0..3).map(|i| image(&format!("new{i}"), None)).collect();
        lightbox.reset(replacement, Timing::default());
        assert!(!lightbox.is_open());
        let _ = lightbox.open(0);
        assert_ne!(lightbox.session_id(), Some(old));

        let _ = lightbox.on_timer(Timer::SwapImage { session: old, index: 1 });
        assert_eq!(lightbox.displayed_index(), Some(0));

        let _ = lightbox.close();
        let _ = lightbox.on_timer(Timer::RemoveOverlay { session: old });
        assert!(lightbox.is_open());
    }

    #[test]
    fn open_displays_requested_image_and_locks_scroll() {
        let mut lightbox = Lightbox::new(
            vec![image("A", Some("First")), image("B", None)],
            Timing::default(),
        );
        let effects = lightbox.open(0);

        assert_eq!(effects, vec![Effect::LockScroll]);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.phase(), Some(Phase::Shown));
        assert_eq!(lightbox.current_index(), Some(0));
        assert_eq!(
            lightbox.displayed().and_then(ImageDescriptor::caption_text),
            Some("First")
        );
        assert!(lightbox.image_visible());
    }

    #[test]
    fn open_out_of_range_is_rejected() {
        let mut lightbox = gallery(2);
        assert!(lightbox.open(2).is_empty());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut lightbox = gallery(0);
        assert!(lightbox.open(0).is_empty());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn reentrant_open_is_rejected() {
        let mut lightbox = gallery(3);
        lightbox.open(0);
        assert!(lightbox.open(2).is_empty());
        assert_eq!(lightbox.current_index(), Some(0));

        lightbox.close();
        assert!(lightbox.open(2).is_empty());
        assert_eq!(lightbox.phase(), Some(Phase::Closing));
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let mut lightbox = gallery(3);
        lightbox.open(2);
        lightbox.next();
        assert_eq!(lightbox.current_index(), Some(0));
        lightbox.prev();
        assert_eq!(lightbox.current_index(), Some(2));
    }

    #[test]
    fn navigation_hides_then_swaps_image() {
        let mut lightbox = gallery(3);
        lightbox.open(0);
        let session = lightbox.session_id().expect("open");

        let effects = lightbox.next();
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                timer: Timer::SwapImage { session, index: 1 },
                delay: Duration::from_millis(200),
            }]
        );
        assert!(!lightbox.image_visible());
        assert_eq!(lightbox.displayed_index(), Some(0));

        settle(&mut lightbox, effects);
        assert!(lightbox.image_visible());
        assert_eq!(lightbox.displayed_index(), Some(1));
    }

    #[test]
    fn single_image_has_no_navigation() {
        let mut lightbox = gallery(1);
        lightbox.open(0);

        assert!(!lightbox.has_navigation());
        assert_eq!(lightbox.controls(), &[Control::Close]);
        assert!(lightbox.next().is_empty());
        assert!(lightbox.prev().is_empty());
        assert!(lightbox.key(KeyCommand::ArrowRight).is_empty());

        lightbox.touch_start(0, 300.0);
        assert!(lightbox.touch_end(0, 0.0).is_empty());
        assert_eq!(lightbox.current_index(), Some(0));
        assert!(lightbox.image_visible());
    }

    #[test]
    fn close_removes_overlay_after_fade_out() {
        let mut lightbox = gallery(2);
        lightbox.open(1);
        let session = lightbox.session_id().expect("open");

        let effects = lightbox.close();
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                timer: Timer::RemoveOverlay { session },
                delay: Duration::from_millis(300),
            }]
        );
        assert!(lightbox.is_open());

        assert_eq!(settle(&mut lightbox, effects), vec![Effect::RestoreScroll]);
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current_index(), None);
    }

    #[test]
    fn second_close_is_a_no_op() {
        let mut lightbox = gallery(2);
        lightbox.open(0);
        let first = lightbox.close();
        assert_eq!(first.len(), 1);
        assert!(lightbox.close().is_empty());

        settle(&mut lightbox, first);
        assert!(lightbox.close().is_empty());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn close_when_never_opened_is_a_no_op() {
        let mut lightbox = gallery(2);
        assert!(lightbox.close().is_empty());
    }

    #[test]
    fn stale_timers_are_ignored() {
        let mut lightbox = gallery(3);
        lightbox.open(0);
        let swap = lightbox.next();
        let remove = lightbox.close();
        settle(&mut lightbox, remove);

        lightbox.open(2);
        assert!(settle(&mut lightbox, swap).is_empty());
        assert_eq!(lightbox.displayed_index(), Some(2));

        let stale_remove = Timer::RemoveOverlay {
            session: lightbox.session_id().expect("open") - 1,
        };
        assert!(lightbox.on_timer(stale_remove).is_empty());
        assert!(lightbox.is_open());
    }

    #[test]
    fn remove_timer_requires_closing_phase() {
        let mut lightbox = gallery(2);
        lightbox.open(0);
        let session = lightbox.session_id().expect("open");
        assert!(lightbox
            .on_timer(Timer::RemoveOverlay { session })
            .is_empty());
        assert!(lightbox.is_open());
    }

    #[test]
    fn keys_are_inert_after_removal() {
        let mut lightbox = gallery(3);
        lightbox.open(0);
        let effects = lightbox.key(KeyCommand::Escape);
        settle(&mut lightbox, effects);

        for command in [
            KeyCommand::Escape,
            KeyCommand::ArrowLeft,
            KeyCommand::ArrowRight,
            KeyCommand::FocusNext,
            KeyCommand::Activate,
        ] {
            assert!(lightbox.key(command).is_empty());
        }
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.focused(), None);
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut lightbox = gallery(3);
        lightbox.open(1);
        lightbox.key(KeyCommand::ArrowRight);
        assert_eq!(lightbox.current_index(), Some(2));
        lightbox.key(KeyCommand::ArrowLeft);
        lightbox.key(KeyCommand::ArrowLeft);
        assert_eq!(lightbox.current_index(), Some(0));
    }

    #[test]
    fn pointer_targets() {
        let mut lightbox = gallery(3);
        lightbox.open(0);

        assert!(lightbox.pointer(PointerTarget::Image).is_empty());
        assert_eq!(lightbox.phase(), Some(Phase::Shown));

        lightbox.pointer(PointerTarget::Control(Control::Next));
        assert_eq!(lightbox.current_index(), Some(1));
        lightbox.pointer(PointerTarget::Control(Control::Prev));
        assert_eq!(lightbox.current_index(), Some(0));

        lightbox.pointer(PointerTarget::Background);
        assert_eq!(lightbox.phase(), Some(Phase::Closing));
    }

    #[test]
    fn focus_cycles_through_controls() {
        let mut lightbox = gallery(3);
        lightbox.open(0);
        assert_eq!(lightbox.focused(), None);

        lightbox.key(KeyCommand::FocusNext);
        assert_eq!(lightbox.focused(), Some(Control::Prev));
        lightbox.key(KeyCommand::FocusNext);
        assert_eq!(lightbox.focused(), Some(Control::Next));
        lightbox.key(KeyCommand::FocusNext);
        assert_eq!(lightbox.focused(), Some(Control::Close));
        lightbox.key(KeyCommand::FocusNext);
        assert_eq!(lightbox.focused(), Some(Control::Prev));
        lightbox.key(KeyCommand::FocusPrevious);
        assert_eq!(lightbox.focused(), Some(Control::Close));
    }

    #[test]
    fn activate_runs_focused_control() {
        let mut lightbox = gallery(3);
        lightbox.open(0);
        assert!(lightbox.key(KeyCommand::Activate).is_empty());

        lightbox.key(KeyCommand::FocusNext);
        lightbox.key(KeyCommand::FocusNext);
        lightbox.key(KeyCommand::Activate);
        assert_eq!(lightbox.current_index(), Some(1));

        lightbox.key(KeyCommand::FocusPrevious);
        lightbox.key(KeyCommand::Activate);
        assert_eq!(lightbox.current_index(), Some(0));
    }

    #[test]
    fn focus_is_reset_for_new_overlay() {
        let mut lightbox = gallery(1);
        lightbox.open(0);
        lightbox.key(KeyCommand::FocusPrevious);
        assert_eq!(lightbox.focused(), Some(Control::Close));

        let effects = lightbox.key(KeyCommand::Activate);
        settle(&mut lightbox, effects);
        lightbox.open(0);
        assert_eq!(lightbox.focused(), None);
    }

    #[test]
    fn swipes_navigate() {
        let mut lightbox = gallery(3);
        lightbox.open(0);

        lightbox.touch_start(7, 300.0);
        lightbox.touch_end(7, 200.0);
        assert_eq!(lightbox.current_index(), Some(1));

        lightbox.touch_start(7, 100.0);
        lightbox.touch_end(7, 200.0);
        assert_eq!(lightbox.current_index(), Some(0));

        lightbox.touch_start(7, 100.0);
        lightbox.touch_end(7, 130.0);
        assert_eq!(lightbox.current_index(), Some(0));
    }

    #[test]
    fn three_image_scenario() {
        let mut lightbox = Lightbox::new(
            vec![image("A", None), image("B", None), image("C", None)],
            Timing::default(),
        );

        let effects = lightbox.open(2);
        settle(&mut lightbox, effects);
        assert_eq!(lightbox.displayed().and_then(ImageDescriptor::alt_text), Some("C"));

        let effects = lightbox.key(KeyCommand::ArrowRight);
        settle(&mut lightbox, effects);
        assert_eq!(lightbox.displayed().and_then(ImageDescriptor::alt_text), Some("A"));

        let effects = lightbox.key(KeyCommand::ArrowLeft);
        settle(&mut lightbox, effects);
        assert_eq!(lightbox.displayed().and_then(ImageDescriptor::alt_text), Some("C"));

        let effects = lightbox.key(KeyCommand::Escape);
        assert_eq!(settle(&mut lightbox, effects), vec![Effect::RestoreScroll]);
        assert!(!lightbox.is_open());
    }

    proptest! {
        #[test]
        fn n_steps_return_to_origin(len in 2usize..12, start in 0usize..12, forward in any::<bool>()) {
            let start = start % len;
            let mut lightbox = gallery(len);
            lightbox.open(start);
            for _ in 0..len {
                if forward { lightbox.next(); } else { lightbox.prev(); }
            }
            prop_assert_eq!(lightbox.current_index(), Some(start));
        }

        #[test]
        fn index_stays_in_range(len in 1usize..8, moves in proptest::collection::vec(any::<bool>(), 0..40)) {
            let mut lightbox = gallery(len);
            lightbox.open(0);
            for forward in moves {
                let effects = if forward { lightbox.next() } else { lightbox.prev() };
                settle(&mut lightbox, effects);
                let index = lightbox.current_index().unwrap_or(usize::MAX);
                prop_assert!(index < len);
                prop_assert_eq!(lightbox.displayed_index(), Some(index));
            }
        }
    }
}
