// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! The booklet keeps no state on disk beyond user preferences, so only the
//! config directory is resolved here.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`WELCOME_BOOKLET_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "WelcomeBooklet";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "WELCOME_BOOKLET_CONFIG_DIR";

/// Name of the booklet entry document inside a booklet directory.
pub const BOOKLET_INDEX: &str = "index.html";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Only the first call has an effect; later calls are ignored and logged.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI config dir override already initialized");
    }
}

/// Returns the CLI override for config directory, if set.
fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path with an optional override.
///
/// This directory holds user preferences (settings.toml).
///
/// - Linux: `~/.config/WelcomeBooklet/`
/// - macOS: `~/Library/Application Support/WelcomeBooklet/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\WelcomeBooklet\`
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Resolves the booklet document for a CLI path.
///
/// A directory resolves to its `index.html`; anything else is used as is.
pub fn resolve_booklet_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(BOOKLET_INDEX)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir_with_override(None);
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn directory_resolves_to_index() {
        let temp_dir = tempdir().expect("temp dir");
        let resolved = resolve_booklet_path(temp_dir.path());
        assert_eq!(resolved, temp_dir.path().join(BOOKLET_INDEX));
    }

    #[test]
    fn file_path_is_kept() {
        let path = Path::new("/srv/booklet/villa.html");
        assert_eq!(resolve_booklet_path(path), path.to_path_buf());
    }
}
