// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and touch events are routed according to what currently
//! owns the input: the lightbox while it is open, the gallery grid on the
//! gallery screen, and only the global reload shortcut otherwise.

use super::message::TouchInput;
use super::{Message, Screen};
use crate::gallery::KeyCommand;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, touch, window, Event, Subscription};
use std::time::Duration;

/// Frame interval of the lightbox fade animation.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Which component receives keyboard and touch input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOwner {
    /// The welcome splash or a plain screen; only reload is handled.
    Global,
    Gallery,
    Lightbox,
}

impl InputOwner {
    #[must_use]
    pub fn resolve(screen: Screen, welcome_active: bool, lightbox_open: bool) -> Self {
        if welcome_active {
            InputOwner::Global
        } else if lightbox_open {
            InputOwner::Lightbox
        } else if screen == Screen::Gallery {
            InputOwner::Gallery
        } else {
            InputOwner::Global
        }
    }
}

/// Creates the event subscription for the current input owner.
pub fn create_event_subscription(owner: InputOwner) -> Subscription<Message> {
    match owner {
        InputOwner::Global => event::listen_with(global_event),
        InputOwner::Gallery => event::listen_with(gallery_event),
        InputOwner::Lightbox => event::listen_with(lightbox_event),
    }
}

/// Ticks while a fade is running so the view can redraw intermediate frames.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Reports window resizes, whatever owns the input.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(window_event)
}

fn window_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    }
}

fn global_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match (event, status) {
        (
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::F5),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::Reload),
        _ => None,
    }
}

fn gallery_event(event: Event, status: event::Status, window: window::Id) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match &event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            gallery_key(key, *modifiers).map(Message::Gallery)
        }
        _ => global_event(event, status, window),
    }
}

fn lightbox_event(event: Event, status: event::Status, window: window::Id) -> Option<Message> {
    match &event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            lightbox_key(key, *modifiers).map(Message::LightboxKey)
        }
        // Touches on the image are captured by its mouse area but still count
        // towards a swipe.
        Event::Touch(touch_event) => lightbox_touch(touch_event).map(Message::LightboxTouch),
        _ => global_event(event, status, window),
    }
}

/// Maps a key press to a lightbox command.
#[must_use]
pub fn lightbox_key(key: &Key, modifiers: Modifiers) -> Option<KeyCommand> {
    match key {
        Key::Named(Named::Escape) => Some(KeyCommand::Escape),
        Key::Named(Named::ArrowLeft) => Some(KeyCommand::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(KeyCommand::ArrowRight),
        Key::Named(Named::Tab) if modifiers.shift() => Some(KeyCommand::FocusPrevious),
        Key::Named(Named::Tab) => Some(KeyCommand::FocusNext),
        Key::Named(Named::Enter | Named::Space) => Some(KeyCommand::Activate),
        _ => None,
    }
}

/// Maps a key press to thumbnail grid navigation.
#[must_use]
pub fn gallery_key(key: &Key, modifiers: Modifiers) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::Tab) if modifiers.shift() => Some(gallery::Message::FocusPrevious),
        Key::Named(Named::Tab) => Some(gallery::Message::FocusNext),
        Key::Named(Named::Enter | Named::Space) => Some(gallery::Message::ActivateFocused),
        _ => None,
    }
}

fn lightbox_touch(event: &touch::Event) -> Option<TouchInput> {
    match *event {
        touch::Event::FingerPressed { id, position } => Some(TouchInput::Pressed {
            finger: id.0,
            x: position.x,
        }),
        touch::Event::FingerLifted { id, position } => Some(TouchInput::Lifted {
            finger: id.0,
            x: position.x,
        }),
        touch::Event::FingerLost { id, .. } => Some(TouchInput::Lost { finger: id.0 }),
        touch::Event::FingerMoved { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    #[test]
    fn resize_is_reported() {
        let resized = Event::Window(window::Event::Resized(Size::new(800.0, 600.0)));
        assert!(matches!(
            window_event(resized, event::Status::Ignored, window::Id::unique()),
            Some(Message::WindowResized(size)) if size.height == 600.0
        ));
    }

    #[test]
    fn welcome_owns_nothing_but_reload() {
        assert_eq!(InputOwner::resolve(Screen::Gallery, true, true), InputOwner::Global);
    }

    #[test]
    fn open_lightbox_owns_input_on_any_screen() {
        assert_eq!(InputOwner::resolve(Screen::Gallery, false, true), InputOwner::Lightbox);
        assert_eq!(InputOwner::resolve(Screen::Home, false, true), InputOwner::Lightbox);
    }

    #[test]
    fn gallery_screen_owns_thumbnail_keys() {
        assert_eq!(InputOwner::resolve(Screen::Gallery, false, false), InputOwner::Gallery);
        assert_eq!(InputOwner::resolve(Screen::Info, false, false), InputOwner::Global);
    }

    #[test]
    fn lightbox_keys() {
        let none = Modifiers::empty();
        assert_eq!(lightbox_key(&Key::Named(Named::Escape), none), Some(KeyCommand::Escape));
        assert_eq!(
            lightbox_key(&Key::Named(Named::ArrowRight), none),
            Some(KeyCommand::ArrowRight)
        );
        assert_eq!(
            lightbox_key(&Key::Named(Named::Tab), Modifiers::SHIFT),
            Some(KeyCommand::FocusPrevious)
        );
        assert_eq!(lightbox_key(&Key::Named(Named::Space), none), Some(KeyCommand::Activate));
        assert_eq!(lightbox_key(&Key::Character("a".into()), none), None);
    }

    #[test]
    fn gallery_keys() {
        let none = Modifiers::empty();
        assert!(matches!(
            gallery_key(&Key::Named(Named::Tab), none),
            Some(gallery::Message::FocusNext)
        ));
        assert!(matches!(
            gallery_key(&Key::Named(Named::Enter), none),
            Some(gallery::Message::ActivateFocused)
        ));
        assert!(gallery_key(&Key::Named(Named::Escape), none).is_none());
    }

    #[test]
    fn touch_events_become_swipe_input() {
        let pressed = touch::Event::FingerPressed {
            id: touch::Finger(7),
            position: Point::new(120.0, 40.0),
        };
        assert_eq!(
            lightbox_touch(&pressed),
            Some(TouchInput::Pressed { finger: 7, x: 120.0 })
        );

        let lost = touch::Event::FingerLost {
            id: touch::Finger(7),
            position: Point::ORIGIN,
        };
        assert_eq!(lightbox_touch(&lost), Some(TouchInput::Lost { finger: 7 }));
    }
}
