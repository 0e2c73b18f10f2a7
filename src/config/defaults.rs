// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Lightbox**: Fade and swap delays, swipe threshold
//! - **Map**: Center, zoom and tile layer of the point-of-interest map
//! - **Reveal**: Scroll-triggered reveal threshold

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Delay between starting the fade-out and removing the overlay (ms).
pub const DEFAULT_FADE_OUT_MS: u64 = 300;

/// Delay between hiding the current image and swapping its source (ms).
pub const DEFAULT_SWAP_DELAY_MS: u64 = 200;

/// Upper bound for both lightbox delays (ms).
pub const MAX_TRANSITION_MS: u64 = 2_000;

/// Minimum horizontal travel for a touch swipe to navigate (px).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Smallest accepted swipe threshold (px).
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Largest accepted swipe threshold (px).
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Map Defaults
// ==========================================================================

/// Latitude of the map center (the accommodation).
pub const DEFAULT_MAP_CENTER_LAT: f64 = 43.5;

/// Longitude of the map center (the accommodation).
pub const DEFAULT_MAP_CENTER_LNG: f64 = 6.5;

/// Initial zoom level of the map.
pub const DEFAULT_MAP_ZOOM: u8 = 13;

/// Highest zoom level a slippy-map tile server serves.
pub const MAX_MAP_ZOOM: u8 = 19;

/// Public tile server template.
pub const DEFAULT_TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution required by the tile server.
pub const DEFAULT_TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_FADE_OUT_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_SWAP_DELAY_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_MAP_ZOOM <= MAX_MAP_ZOOM);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
};
