// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences
//! read from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Lightbox transition delays and swipe threshold
//! - `[map]` - Map availability, center, zoom and tile layer
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `WELCOME_BOOKLET_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use welcome_booklet::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using default settings: {key}");
//! }
//! println!("zoom: {}", config.map.zoom);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Lightbox timing and gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Fade-out duration before the overlay is removed (milliseconds).
    #[serde(
        default = "default_fade_out_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fade_out_ms: Option<u64>,

    /// Delay before the displayed image is swapped while navigating (milliseconds).
    #[serde(
        default = "default_swap_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub swap_delay_ms: Option<u64>,

    /// Horizontal distance a touch swipe must exceed (pixels).
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            fade_out_ms: default_fade_out_ms(),
            swap_delay_ms: default_swap_delay_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
        }
    }
}

impl GalleryConfig {
    /// Fade-out delay, clamped to the supported range.
    #[must_use]
    pub fn fade_out(&self) -> Duration {
        let ms = self.fade_out_ms.unwrap_or(DEFAULT_FADE_OUT_MS);
        Duration::from_millis(ms.min(MAX_TRANSITION_MS))
    }

    /// Image swap delay, clamped to the supported range.
    #[must_use]
    pub fn swap_delay(&self) -> Duration {
        let ms = self.swap_delay_ms.unwrap_or(DEFAULT_SWAP_DELAY_MS);
        Duration::from_millis(ms.min(MAX_TRANSITION_MS))
    }

    /// Swipe threshold, clamped to the supported range.
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold_px
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX)
            .clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX)
    }
}

/// Point-of-interest map settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    /// Whether the map backend is available. When false the fallback
    /// message is shown instead of the map.
    #[serde(default = "default_map_enabled")]
    pub enabled: bool,

    /// Latitude of the map center.
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    /// Longitude of the map center.
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,

    /// Zoom level (0-19).
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Tile server URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Attribution text required by the tile server.
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            enabled: default_map_enabled(),
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Lightbox settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Map settings.
    #[serde(default)]
    pub map: MapConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_fade_out_ms() -> Option<u64> {
    Some(DEFAULT_FADE_OUT_MS)
}

fn default_swap_delay_ms() -> Option<u64> {
    Some(DEFAULT_SWAP_DELAY_MS)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_map_enabled() -> bool {
    true
}

fn default_center_lat() -> f64 {
    DEFAULT_MAP_CENTER_LAT
}

fn default_center_lng() -> f64 {
    DEFAULT_MAP_CENTER_LNG
}

fn default_zoom() -> u8 {
    DEFAULT_MAP_ZOOM
}

fn default_tile_url() -> String {
    DEFAULT_TILE_URL_TEMPLATE.to_string()
}

fn default_attribution() -> String {
    DEFAULT_TILE_ATTRIBUTION.to_string()
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default configuration");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn sectioned_file_loads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
language = "fr"
theme_mode = "light"

[gallery]
fade_out_ms = 450
swap_delay_ms = 120
swipe_threshold_px = 80.0

[map]
zoom = 15
"#,
        )
        .expect("write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(
            loaded,
            Config {
                general: GeneralConfig {
                    language: Some("fr".to_string()),
                    theme_mode: ThemeMode::Light,
                },
                gallery: GalleryConfig {
                    fade_out_ms: Some(450),
                    swap_delay_ms: Some(120),
                    swipe_threshold_px: Some(80.0),
                },
                map: MapConfig {
                    zoom: 15,
                    ..MapConfig::default()
                },
            }
        );
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery.fade_out(), Duration::from_millis(300));
        assert_eq!(config.gallery.swap_delay(), Duration::from_millis(200));
        assert_eq!(config.gallery.swipe_threshold(), 50.0);
        assert!(config.map.enabled);
        assert_eq!(config.map.center_lat, 43.5);
        assert_eq!(config.map.center_lng, 6.5);
        assert_eq!(config.map.zoom, 13);
        assert!(config.map.tile_url.contains("openstreetmap"));
    }

    #[test]
    fn gallery_values_are_clamped() {
        let gallery = GalleryConfig {
            fade_out_ms: Some(60_000),
            swap_delay_ms: None,
            swipe_threshold_px: Some(1.0),
        };
        assert_eq!(gallery.fade_out(), Duration::from_millis(MAX_TRANSITION_MS));
        assert_eq!(
            gallery.swap_delay(),
            Duration::from_millis(DEFAULT_SWAP_DELAY_MS)
        );
        assert_eq!(gallery.swipe_threshold(), MIN_SWIPE_THRESHOLD_PX);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[map]
enabled = false
"#,
        )
        .expect("write config");

        let loaded = load_from_path(&config_path).expect("should load partial config");
        assert!(!loaded.map.enabled);
        assert_eq!(loaded.map.zoom, DEFAULT_MAP_ZOOM);
        assert_eq!(loaded.gallery, GalleryConfig::default());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(
            warning.as_deref(),
            Some("notification-config-load-error")
        );
        assert_eq!(config, Config::default());
    }
}
