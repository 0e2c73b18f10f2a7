// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the current screen under the navigation bar, the
//! lightbox, the welcome splash, then notifications.

use super::{App, Message, Screen};
use crate::ui::gallery::{self as gallery_ui, lightbox_view};
use crate::ui::widgets::scroll_lock;
use crate::ui::{home, info, map_view, navbar, welcome};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Renders the whole window.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let screen = view_screen(app);

    let mut base = Column::new().width(Length::Fill).height(Length::Fill);
    if app.welcome.navigation_visible() {
        base = base.push(
            navbar::view(navbar::ViewContext {
                i18n: &app.i18n,
                current: app.screen,
            })
            .map(Message::Navbar),
        );
    }
    base = base.push(
        Container::new(screen)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    let now = Instant::now();
    if let Some(overlay) = lightbox_view::view(lightbox_view::ViewContext {
        i18n: &app.i18n,
        lightbox: &app.lightbox,
        pictures: &app.pictures,
        overlay_alpha: app.fade.overlay.value(now),
        image_alpha: app.fade.image.value(now),
    }) {
        stack = stack.push(overlay.map(Message::Lightbox));
    }

    if app.welcome.overlay_active() {
        if let Some(content) = &app.booklet.welcome {
            stack = stack.push(
                welcome::view(welcome::ViewContext {
                    i18n: &app.i18n,
                    content,
                    colors: app.theme_mode.colors(),
                })
                .map(Message::Welcome),
            );
        }
    }

    if !app.notifications.is_empty() {
        stack = stack.push(app.notifications.view(&app.i18n).map(Message::Notification));
    }

    stack.into()
}

fn view_screen(app: &App) -> Element<'_, Message> {
    match app.screen {
        Screen::Home => home::view(home::ViewContext {
            i18n: &app.i18n,
            state: &app.home,
            title: &app.booklet.title,
            sections: &app.booklet.sections,
        })
        .map(Message::Home),
        Screen::Map => map_view::view(map_view::ViewContext {
            i18n: &app.i18n,
            state: &app.map,
            points: &app.booklet.points,
            colors: app.theme_mode.colors(),
        })
        .map(Message::Map),
        Screen::Gallery => {
            let grid = gallery_ui::view(gallery_ui::ViewContext {
                i18n: &app.i18n,
                state: &app.gallery,
                images: app.lightbox.images(),
                pictures: &app.pictures,
                lightbox_open: app.lightbox.is_open(),
            })
            .map(Message::Gallery);
            scroll_lock(grid, app.lightbox.is_open()).into()
        }
        Screen::Info => info::view(info::ViewContext {
            i18n: &app.i18n,
            state: &app.info,
            accordions: &app.booklet.accordions,
            contacts: app.booklet.contacts().collect(),
        })
        .map(Message::Info),
    }
}
