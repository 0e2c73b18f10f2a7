// SPDX-License-Identifier: MPL-2.0
//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: The embedded sample booklet could not be read
//! - `warn`: Fallbacks (unreadable config or booklet, missing images)
//! - `info`: Booklet loads and reloads
//! - `debug`: Navigation and lightbox transitions
//! - `trace`: Scroll and reveal bookkeeping
//!
//! `RUST_LOG` overrides the configured level.

use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level applied to this crate; dependencies stay at `warn`.
    pub level: Level,
    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Builds a configuration from a level name such as `debug`.
    ///
    /// Unknown names keep the default level.
    #[must_use]
    pub fn from_level_name(name: Option<&str>) -> Self {
        let level = name
            .and_then(|name| Level::from_str(name).ok())
            .unwrap_or(Level::INFO);
        Self {
            level,
            ..Default::default()
        }
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    /// Enable or disable target (module path) in output.
    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }
}

/// Installs the global tracing subscriber, writing to stderr.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_logging(config: &LogConfig) -> bool {
    let filter = build_env_filter(config.level);
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target);

    let installed = if config.with_timestamps {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.without_time())
            .try_init()
    };
    installed.is_ok()
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG` env var.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    format!("warn,welcome_booklet={level}")
}
