// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.

use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Inverted container so tips stand out against either theme.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let (background, text) = if theme.extended_palette().is_dark {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color { a: 0.3, ..palette::GRAY_400 },
        },
        shadow: shadow::SM,
        text_color: Some(text),
        ..Default::default()
    }
}

/// Wraps `content` with a styled tip shown on hover.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
