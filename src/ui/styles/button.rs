// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (welcome start button).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style::default(),
    }
}

/// Style for the active navbar entry.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Style for inactive navbar entries and secondary actions.
/// Adapts to light/dark theme.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            })),
            text_color,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Lightbox control (close, previous, next).
///
/// `focused` draws a ring for keyboard focus; `alpha` follows the overlay fade.
pub fn lightbox_control(
    focused: bool,
    alpha: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => opacity::OVERLAY_MEDIUM,
        };
        let ring = if focused {
            Border {
                color: Color { a: alpha, ..palette::PRIMARY_400 },
                width: border::FOCUS_RING,
                radius: radius::FULL.into(),
            }
        } else {
            Border {
                radius: radius::FULL.into(),
                ..Border::default()
            }
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: background * alpha,
                ..BLACK
            })),
            text_color: Color { a: alpha, ..WHITE },
            border: ring,
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Gallery thumbnail. Disabled while the lightbox is open.
pub fn thumbnail(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ring_color = match (focused, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => theme.extended_palette().primary.weak.color,
            _ => Color::TRANSPARENT,
        };

        button::Style {
            background: None,
            text_color: theme.palette().text,
            border: Border {
                color: ring_color,
                width: border::FOCUS_RING,
                radius: radius::MD.into(),
            },
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::MD
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}

/// Borderless text button (accordion headers, point-of-interest list).
pub fn text_row(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.weak.color))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
