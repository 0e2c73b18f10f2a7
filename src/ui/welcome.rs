// SPDX-License-Identifier: MPL-2.0
//! Welcome splash overlay.

use crate::booklet::WelcomeContent;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, opaque, text, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Start,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: &'a WelcomeContent,
    pub colors: ColorScheme,
}

/// Full-window splash. It captures every pointer press, so nothing behind it
/// is reachable until the start control is used.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let label = if ctx.content.start_label.is_empty() {
        ctx.i18n.tr("welcome-start-default")
    } else {
        ctx.content.start_label.clone()
    };

    let mut column = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::WELCOME_MAX_WIDTH)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.content.title.as_str()).size(typography::DISPLAY));

    for paragraph in ctx.content.body.split("\n\n").filter(|p| !p.is_empty()) {
        column = column.push(
            Text::new(paragraph)
                .size(typography::BODY_LG)
                .align_x(Horizontal::Center),
        );
    }

    column = column.push(
        button(text(label).size(typography::BODY_LG))
            .padding([spacing::SM, spacing::XL])
            .style(styles::button::primary)
            .on_press(Message::Start),
    );

    opaque(
        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(spacing::XL)
            .style(styles::overlay::splash(ctx.colors)),
    )
}
