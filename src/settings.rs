//! User settings
//!
//! Only the colour theme for now. It is stored as a bare string so the page's
//! own scripts and stylesheets can read the same key.

use crate::platform::{KeyValueStore, PlatformResult};
use std::fmt;

/// Storage key for the theme preference
pub const THEME_KEY: &str = "portfolio-theme";

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored value. Unknown values are None.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Stored theme, dark when missing, unknown or unreadable
    pub fn load(store: &impl KeyValueStore) -> Self {
        store
            .get(THEME_KEY)
            .ok()
            .flatten()
            .and_then(|s| Self::parse(&s))
            .unwrap_or_default()
    }

    pub fn save(self, store: &mut impl KeyValueStore) -> PlatformResult<()> {
        store.set(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_default_is_dark() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        Theme::Light.save(&mut store).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_toggle_then_save() {
        let mut store = MemoryStore::new();
        let theme = Theme::load(&store).toggle();
        theme.save(&mut store).unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }

    #[test]
    fn test_display() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("Dark"), None);
    }
}
