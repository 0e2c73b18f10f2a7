// SPDX-License-Identifier: MPL-2.0
//! Navigation bar between booklet sections.
//!
//! The bar is hidden by the caller while the welcome splash is active.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    Reload,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
    Reload,
}

/// Process a navbar message. Selecting the current screen is a no-op.
pub fn update(message: Message, current: Screen) -> Event {
    match message {
        Message::Navigate(screen) if screen == current => Event::None,
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::Reload => Event::Reload,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center);

    for screen in Screen::ALL {
        let style = if screen == ctx.current {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        row = row.push(
            button(Text::new(ctx.i18n.tr(screen.i18n_key())).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(style)
                .on_press(Message::Navigate(screen)),
        );
    }

    let reload = button(Text::new(ctx.i18n.tr("nav-reload")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected)
        .on_press(Message::Reload);

    row = row.push(Space::new().width(Length::Fill)).push(styles::tooltip::styled(
        reload,
        ctx.i18n.tr("nav-reload-tooltip"),
        tooltip::Position::Bottom,
    ));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}
