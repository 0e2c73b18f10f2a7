// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for booklet navigation.

/// Sections of the booklet reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Map,
    Gallery,
    Info,
}

impl Screen {
    /// Navigation order.
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::Map, Screen::Gallery, Screen::Info];

    /// Fluent key of the navigation label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::Home => "nav-home",
            Screen::Map => "nav-map",
            Screen::Gallery => "nav-gallery",
            Screen::Info => "nav-info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_the_landing_screen() {
        assert_eq!(Screen::default(), Screen::Home);
        assert_eq!(Screen::ALL[0], Screen::Home);
    }

    #[test]
    fn every_screen_has_a_distinct_label() {
        let mut keys: Vec<_> = Screen::ALL.iter().map(|s| s.i18n_key()).collect();
        keys.dedup();
        assert_eq!(keys.len(), Screen::ALL.len());
    }
}
