// SPDX-License-Identifier: MPL-2.0
//! Per-session flags and the welcome gate.
//!
//! A session lasts as long as the process. Reloading the booklet starts a new
//! visit in the same session, so flags set during one visit are seen by the
//! next one, but nothing is written to disk.

use std::collections::HashMap;

/// Session key recording that the welcome screen was dismissed.
pub const WELCOME_FLAG_KEY: &str = "welcomeShown";

/// Value stored under [`WELCOME_FLAG_KEY`].
pub const WELCOME_FLAG_VALUE: &str = "true";

/// Key/value storage that lives for one session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`SessionStore`] scoped to the running process.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    values: HashMap<String, String>,
}

impl MemorySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Visibility of the welcome overlay for one visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeGate {
    overlay_active: bool,
}

impl WelcomeGate {
    /// Decides the state of a new visit.
    ///
    /// The overlay is shown only when the booklet has welcome content and the
    /// session has not recorded a dismissal yet.
    pub fn on_load(store: &impl SessionStore, has_welcome: bool) -> Self {
        let overlay_active = has_welcome && store.get(WELCOME_FLAG_KEY).is_none();
        Self { overlay_active }
    }

    /// Handles the start control: hides the overlay and records the dismissal.
    pub fn start(&mut self, store: &mut impl SessionStore) {
        if !self.overlay_active {
            return;
        }
        self.overlay_active = false;
        store.set(WELCOME_FLAG_KEY, WELCOME_FLAG_VALUE);
        tracing::debug!("welcome dismissed");
    }

    #[must_use]
    pub fn overlay_active(self) -> bool {
        self.overlay_active
    }

    /// The navigation bar is hidden exactly while the overlay is active.
    #[must_use]
    pub fn navigation_visible(self) -> bool {
        !self.overlay_active
    }
}
