// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox and the welcome splash.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed lightbox backdrop at fade level `alpha` (0 to 1).
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * alpha,
            ..BLACK
        })),
        text_color: Some(Color { a: alpha, ..WHITE }),
        ..Default::default()
    }
}

/// Caption strip under the lightbox image.
pub fn caption(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * alpha,
            ..BLACK
        })),
        text_color: Some(Color { a: alpha, ..WHITE }),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-window welcome splash.
pub fn splash(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(colors.splash_background)),
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_scales_with_fade() {
        let full = backdrop(1.0)(&Theme::Dark);
        let half = backdrop(0.5)(&Theme::Dark);

        match (full.background, half.background) {
            (Some(Background::Color(full)), Some(Background::Color(half))) => {
                assert_eq!(full.a, opacity::BACKDROP);
                assert!((half.a - opacity::BACKDROP / 2.0).abs() < f32::EPSILON);
            }
            other => panic!("expected color backgrounds, got {other:?}"),
        }
    }
}
