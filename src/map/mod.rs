// SPDX-License-Identifier: MPL-2.0
//! Point-of-interest map model.
//!
//! [`bind`] turns the booklet's points of interest and the `[map]` settings
//! into a [`MapState`]. Rendering lives in `ui::map_view`; this module only
//! knows about coordinates, markers and the tile layer description.

pub mod projection;

pub use projection::{project, TILE_SIZE};

use crate::booklet::PointOfInterest;
use crate::config::{MapConfig, MAX_MAP_ZOOM};

/// Placeholders a tile URL template must carry to address a tile.
const REQUIRED_PLACEHOLDERS: [&str; 3] = ["{z}", "{x}", "{y}"];

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Tile source description. Tiles are not fetched; the template and
/// attribution are carried for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl TileLayer {
    /// URL of one tile, with the `{s}` subdomain fixed to `a`.
    #[must_use]
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        self.url_template
            .replace("{s}", "a")
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

/// A placed point of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    /// Popup text.
    pub title: String,
    pub icon: String,
}

/// A ready-to-render map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapModel {
    pub center: LatLng,
    pub zoom: u8,
    pub tile_layer: TileLayer,
    pub markers: Vec<Marker>,
    /// Marker whose popup is open.
    pub selected: Option<usize>,
}

impl MapModel {
    /// Opens the popup of marker `index`. Out-of-range indices close it.
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.markers.len()).then_some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_marker(&self) -> Option<&Marker> {
        self.selected.and_then(|index| self.markers.get(index))
    }

    /// Marker placed for the `poi_index`-th point of interest, if any.
    ///
    /// Points without usable coordinates have no marker, so marker and point
    /// indices diverge after the first skipped point.
    #[must_use]
    pub fn marker_for_point(points: &[PointOfInterest], poi_index: usize) -> Option<usize> {
        let point = points.get(poi_index)?;
        point.coordinates()?;
        Some(
            points[..poi_index]
                .iter()
                .filter(|p| p.coordinates().is_some())
                .count(),
        )
    }
}

/// Why the map cannot be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    /// `[map] enabled = false`.
    Disabled,
    /// The tile template cannot address tiles.
    InvalidTileTemplate,
}

impl Unavailable {
    /// Returns the i18n message key for this reason.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Unavailable::Disabled => "map-unavailable-disabled",
            Unavailable::InvalidTileTemplate => "map-unavailable-tiles",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapState {
    Ready(MapModel),
    /// A single fallback message replaces the map.
    Unavailable(Unavailable),
}

impl MapState {
    #[must_use]
    pub fn model(&self) -> Option<&MapModel> {
        match self {
            MapState::Ready(model) => Some(model),
            MapState::Unavailable(_) => None,
        }
    }

    pub fn model_mut(&mut self) -> Option<&mut MapModel> {
        match self {
            MapState::Ready(model) => Some(model),
            MapState::Unavailable(_) => None,
        }
    }
}

/// Builds the map for a set of points of interest.
///
/// Points whose coordinates did not parse are skipped without error.
#[must_use]
pub fn bind(config: &MapConfig, points: &[PointOfInterest]) -> MapState {
    if !config.enabled {
        tracing::info!("map disabled in configuration");
        return MapState::Unavailable(Unavailable::Disabled);
    }
    if !REQUIRED_PLACEHOLDERS
        .iter()
        .all(|placeholder| config.tile_url.contains(placeholder))
    {
        tracing::warn!(template = %config.tile_url, "tile template lacks {{z}}/{{x}}/{{y}}");
        return MapState::Unavailable(Unavailable::InvalidTileTemplate);
    }

    let markers: Vec<Marker> = points
        .iter()
        .filter_map(|point| {
            let (lat, lng) = point.coordinates()?;
            Some(Marker {
                position: LatLng { lat, lng },
                title: point.title.clone(),
                icon: point.icon.clone(),
            })
        })
        .collect();

    let skipped = points.len() - markers.len();
    if skipped > 0 {
        tracing::debug!(skipped, "points of interest without coordinates");
    }

    MapState::Ready(MapModel {
        center: LatLng {
            lat: config.center_lat,
            lng: config.center_lng,
        },
        zoom: config.zoom.min(MAX_MAP_ZOOM),
        tile_layer: TileLayer {
            url_template: config.tile_url.clone(),
            attribution: config.attribution.clone(),
        },
        markers,
        selected: None,
    })
}
