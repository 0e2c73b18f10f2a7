// SPDX-License-Identifier: MPL-2.0
//! Light, dark and system theme modes.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors that the built-in Iced themes do not provide.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub map_land: Color,
    pub map_grid: Color,
    pub marker: Color,
    pub marker_selected: Color,
    pub popup_background: Color,
    pub popup_text: Color,
    pub splash_background: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            map_land: palette::LAND,
            map_grid: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            marker: palette::ACCENT_500,
            marker_selected: palette::PRIMARY_600,
            popup_background: palette::WHITE,
            popup_text: palette::GRAY_900,
            splash_background: Color {
                a: opacity::SPLASH,
                ..palette::PRIMARY_100
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            map_land: palette::LAND_DARK,
            map_grid: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_200
            },
            marker: palette::ACCENT_500,
            marker_selected: palette::PRIMARY_400,
            popup_background: palette::GRAY_900,
            popup_text: palette::WHITE,
            splash_background: Color {
                a: opacity::SPLASH,
                ..palette::PRIMARY_800
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to light on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }
}
