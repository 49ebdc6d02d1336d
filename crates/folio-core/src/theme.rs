//! Light/dark theme selection and its single persisted preference.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;

/// Storage key for the theme preference
pub const THEME_KEY: &str = "theme";

/// Media query used when no preference has been stored
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Value written to preference storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(self, Theme::Light)
    }

    /// Glyph shown on the toggle button
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value preference storage (browser local storage in production)
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> FolioResult<()>;
}

/// In-memory [`PreferenceStore`]
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> FolioResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme to apply on page load.
///
/// A stored value wins: exactly `light` selects [`Theme::Light`], anything
/// else [`Theme::Dark`]. Without one, or with an empty one, the system
/// color scheme decides.
pub fn resolve_theme<S: PreferenceStore + ?Sized>(store: &S, prefers_light: bool) -> Theme {
    match store.get(THEME_KEY) {
        Some(stored) if stored == Theme::Light.as_str() => Theme::Light,
        Some(stored) if !stored.is_empty() => Theme::Dark,
        _ if prefers_light => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Flip `current` and remember the choice.
///
/// A failed write is logged; the flipped theme is returned either way.
pub fn toggle_theme<S: PreferenceStore + ?Sized>(current: Theme, store: &mut S) -> Theme {
    let next = current.toggled();
    if let Err(e) = store.set(THEME_KEY, next.as_str()) {
        tracing::warn!(error = %e, theme = %next, "Failed to persist theme preference");
    }
    tracing::info!(theme = %next, "Theme toggled");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    struct ReadOnly;

    impl PreferenceStore for ReadOnly {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> FolioResult<()> {
            Err(FolioError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn stored_preference_wins_over_system() {
        let mut store = MemoryPreferences::new();
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(resolve_theme(&store, true), Theme::Dark);

        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(resolve_theme(&store, false), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_means_dark() {
        let mut store = MemoryPreferences::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(resolve_theme(&store, true), Theme::Dark);
    }

    #[test]
    fn falls_back_to_system_preference() {
        let mut store = MemoryPreferences::new();
        assert_eq!(resolve_theme(&store, true), Theme::Light);
        assert_eq!(resolve_theme(&store, false), Theme::Dark);

        // An empty stored value counts as unset
        store.set(THEME_KEY, "").unwrap();
        assert_eq!(resolve_theme(&store, true), Theme::Light);
        assert_eq!(resolve_theme(&store, false), Theme::Dark);
    }

    #[test]
    fn toggle_persists_choice() {
        let mut store = MemoryPreferences::new();
        let next = toggle_theme(Theme::Dark, &mut store);
        assert_eq!(next, Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));

        let next = toggle_theme(next, &mut store);
        assert_eq!(next, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_survives_storage_failure() {
        assert_eq!(toggle_theme(Theme::Light, &mut ReadOnly), Theme::Dark);
    }

    #[test]
    fn icons_match_theme() {
        assert_eq!(Theme::Light.icon(), "☀️");
        assert_eq!(Theme::Dark.icon(), "🌙");
    }
}
