// SPDX-License-Identifier: MPL-2.0
//! Web Mercator projection in slippy-map pixel space.

use super::LatLng;
use std::f64::consts::PI;

/// Edge length of one map tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude beyond which Web Mercator is undefined.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Global pixel coordinates of `position` at `zoom`.
#[must_use]
pub fn world_pixel(position: LatLng, zoom: u8) -> (f64, f64) {
    let scale = TILE_SIZE * f64::from(1u32 << zoom.min(31));
    let lat = position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = (position.lng + 180.0) / 360.0 * scale;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
    (x, y)
}

/// Offset in pixels of `position` from `center` at `zoom`.
///
/// Positive `x` is east, positive `y` is south, matching screen axes.
#[must_use]
pub fn project(position: LatLng, center: LatLng, zoom: u8) -> (f32, f32) {
    let (px, py) = world_pixel(position, zoom);
    let (cx, cy) = world_pixel(center, zoom);
    #[allow(clippy::cast_possible_truncation)]
    ((px - cx) as f32, (py - cy) as f32)
}
