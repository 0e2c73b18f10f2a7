// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component updates return events; the lightbox returns [`Effect`]s. Both
//! are turned into state changes and tasks here.

use super::message::TouchInput;
use super::{App, Message};
use crate::booklet::Booklet;
use crate::gallery::Effect;
use crate::ui::gallery::{self as gallery_ui, lightbox_view};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Severity;
use crate::ui::{home, info, map_view, welcome};
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Main update dispatch.
pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => match navbar::update(message, app.screen) {
            NavbarEvent::None => Task::none(),
            NavbarEvent::Navigate(screen) => {
                tracing::debug!(?screen, "navigate");
                app.screen = screen;
                Task::none()
            }
            NavbarEvent::Reload => reload(app),
        },
        Message::Welcome(welcome::Message::Start) => {
            app.welcome.start(&mut app.session);
            Task::none()
        }
        Message::Home(message) => {
            home::update(&mut app.home, message);
            Task::none()
        }
        Message::Map(message) => {
            map_view::update(&mut app.map, &app.booklet.points, message);
            Task::none()
        }
        Message::Gallery(message) => handle_gallery(app, message),
        Message::Info(message) => {
            info::update(&mut app.info, message);
            Task::none()
        }
        Message::Notification(message) => {
            app.notifications.handle_message(message);
            Task::none()
        }
        Message::Lightbox(lightbox_view::Message::Pointer(target)) => {
            let effects = app.lightbox.pointer(target);
            apply_effects(app, effects)
        }
        Message::LightboxKey(command) => {
            let effects = app.lightbox.key(command);
            apply_effects(app, effects)
        }
        Message::LightboxTouch(input) => handle_touch(app, input),
        Message::LightboxTimer(timer) => {
            let effects = app.lightbox.on_timer(timer);
            apply_effects(app, effects)
        }
        Message::Reload => reload(app),
        Message::WindowResized(size) => {
            app.resize(size.height);
            Task::none()
        }
        // Redraw only; fades are computed from the clock in `view`.
        Message::Tick(_) => Task::none(),
    }
}

fn handle_gallery(app: &mut App, message: gallery_ui::Message) -> Task<Message> {
    let event = gallery_ui::update(
        &mut app.gallery,
        message,
        app.lightbox.len(),
        app.lightbox.is_open(),
    );
    match event {
        gallery_ui::Event::None => Task::none(),
        gallery_ui::Event::Open(index) => {
            let effects = app.lightbox.open(index);
            apply_effects(app, effects)
        }
    }
}

fn handle_touch(app: &mut App, input: TouchInput) -> Task<Message> {
    match input {
        TouchInput::Pressed { finger, x } => {
            app.lightbox.touch_start(finger, x);
            Task::none()
        }
        TouchInput::Lifted { finger, x } => {
            let effects = app.lightbox.touch_end(finger, x);
            apply_effects(app, effects)
        }
        TouchInput::Lost { finger } => {
            app.lightbox.touch_cancel(finger);
            Task::none()
        }
    }
}

/// Runs lightbox effects and brings the fade animation in line with the
/// new lightbox state.
fn apply_effects(app: &mut App, effects: Vec<Effect>) -> Task<Message> {
    app.fade.sync(&app.lightbox, Instant::now());

    let tasks: Vec<Task<Message>> = effects
        .into_iter()
        .map(|effect| match effect {
            Effect::LockScroll => {
                tracing::trace!(offset = ?app.gallery.offset(), "page scroll locked");
                Task::none()
            }
            Effect::RestoreScroll => {
                tracing::trace!(offset = ?app.gallery.offset(), "page scroll restored");
                operation::snap_to(Id::new(gallery_ui::SCROLLABLE_ID), app.gallery.offset())
            }
            Effect::Schedule { timer, delay } => Task::perform(
                async move { tokio::time::sleep(delay).await },
                move |()| Message::LightboxTimer(timer),
            ),
        })
        .collect();

    Task::batch(tasks)
}

/// Reads the booklet again and starts a new visit in the same session.
fn reload(app: &mut App) -> Task<Message> {
    tracing::info!(path = ?app.booklet_path, "reloading booklet");
    let (booklet, warning) = Booklet::load_or_sample(app.booklet_path.as_deref());
    app.install(booklet);
    if let Some(key) = warning {
        app.notifications.push(Severity::Warning, key);
    }
    Task::none()
}
