// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface for sections, cards and accordion items.
///
/// Derived from the active Iced `Theme` so cards stay readable in both light
/// and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Navigation bar strip.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        text_color: Some(palette.background.strong.text),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Marker popup on the map.
pub fn popup(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.popup_background)),
        text_color: Some(colors.popup_text),
        border: Border {
            color: colors.marker_selected,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Toast with a colored accent border.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.base.color)),
            text_color: Some(palette.background.base.text),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

/// Fallback shown in place of an image that cannot be rendered.
pub fn placeholder(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    container::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_100
        } else {
            palette::GRAY_700
        })),
        text_color: Some(palette::GRAY_400),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
