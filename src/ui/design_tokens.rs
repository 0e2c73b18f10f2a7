// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants of the booklet.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use welcome_booklet::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Lightbox backdrop
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (sea blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.93, 0.97);
    pub const PRIMARY_400: Color = Color::from_rgb(0.33, 0.66, 0.84);
    pub const PRIMARY_500: Color = Color::from_rgb(0.2, 0.55, 0.76);
    pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.45, 0.65);
    pub const PRIMARY_800: Color = Color::from_rgb(0.08, 0.27, 0.4);

    // Accent (terracotta), used for map markers
    pub const ACCENT_500: Color = Color::from_rgb(0.78, 0.36, 0.24);

    // Map land and water tints
    pub const LAND: Color = Color::from_rgb(0.93, 0.91, 0.85);
    pub const LAND_DARK: Color = Color::from_rgb(0.2, 0.21, 0.2);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Lightbox backdrop at full fade-in.
    pub const BACKDROP: f32 = 0.9;

    /// Welcome splash background.
    pub const SPLASH: f32 = 0.96;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const NAVBAR_HEIGHT: f32 = 52.0;

    /// Lightbox control hit area (WCAG 2.5.5 minimum is 44x44).
    pub const LIGHTBOX_CONTROL: f32 = 48.0;

    // Gallery
    pub const THUMBNAIL_WIDTH: f32 = 220.0;
    pub const THUMBNAIL_HEIGHT: f32 = 150.0;
    pub const THUMBNAIL_COLUMNS: usize = 3;

    // Content widths
    pub const CONTENT_MAX_WIDTH: f32 = 760.0;
    pub const WELCOME_MAX_WIDTH: f32 = 560.0;
    pub const POI_LIST_WIDTH: f32 = 260.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    // Map
    pub const MARKER_RADIUS: f32 = 9.0;
    /// Hit radius around a marker center.
    pub const MARKER_HIT_RADIUS: f32 = 16.0;
    pub const POPUP_WIDTH: f32 = 180.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Large headings (booklet, screens)
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Display - Welcome splash heading
    pub const DISPLAY: f32 = 36.0;

    /// Large title - Screen headings
    pub const TITLE_LG: f32 = 28.0;

    /// Medium title - Section headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Card and accordion headers
    pub const TITLE_SM: f32 = 17.0;

    /// Large body - Lightbox captions
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Caption - Attribution, counters
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    /// Focus ring around keyboard-focused thumbnails and controls.
    pub const FOCUS_RING: f32 = 3.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP <= 1.0);
    assert!(opacity::SPLASH > 0.0 && opacity::SPLASH <= 1.0);

    // Sizing validation
    assert!(sizing::LIGHTBOX_CONTROL >= 44.0);
    assert!(sizing::MARKER_HIT_RADIUS > sizing::MARKER_RADIUS);
    assert!(sizing::THUMBNAIL_COLUMNS > 0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
