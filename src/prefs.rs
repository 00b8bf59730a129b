use crate::theme::{self, Theme};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PrefsError {
    #[error("unknown theme id: {0}")]
    UnknownTheme(String),
}

/// Per-user theme selection. Lives for the life of the process; nothing is
/// persisted. Reads and writes from independent users may interleave, so the
/// map sits behind an `RwLock`; within one conversation the platform delivers
/// events serially.
#[derive(Default)]
pub struct PreferenceStore {
    themes: RwLock<HashMap<u64, String>>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored theme id for the user, or the baseline default.
    pub fn theme_id(&self, user: u64) -> String {
        let themes = self.themes.read().expect("preference store poisoned");
        themes
            .get(&user)
            .cloned()
            .unwrap_or_else(|| theme::DEFAULT_THEME.to_string())
    }

    /// Resolved theme for the user. A stale stored id degrades to the
    /// default theme rather than failing.
    pub fn theme(&self, user: u64) -> &'static Theme {
        theme::get(&self.theme_id(user))
    }

    /// Select a theme for the user. Last write wins; ids are validated
    /// against the registry before anything is stored.
    pub fn set_theme(&self, user: u64, theme_id: &str) -> Result<(), PrefsError> {
        if !theme::contains(theme_id) {
            return Err(PrefsError::UnknownTheme(theme_id.to_string()));
        }
        let mut themes = self.themes.write().expect("preference store poisoned");
        themes.insert(user, theme_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_gets_the_default() {
        let store = PreferenceStore::new();
        assert_eq!(store.theme_id(42), theme::DEFAULT_THEME);
        assert_eq!(store.theme(42).id, theme::DEFAULT_THEME);
    }

    #[test]
    fn set_then_get_round_trips_for_every_registered_theme() {
        let store = PreferenceStore::new();
        for theme in theme::list() {
            store.set_theme(7, theme.id).expect("registered theme");
            assert_eq!(store.theme_id(7), theme.id);
        }
    }

    #[test]
    fn last_write_wins() {
        let store = PreferenceStore::new();
        store.set_theme(7, "purple").unwrap();
        store.set_theme(7, "blue").unwrap();
        assert_eq!(store.theme_id(7), "blue");
    }

    #[test]
    fn unknown_theme_is_rejected_and_state_unchanged() {
        let store = PreferenceStore::new();
        store.set_theme(7, "purple").unwrap();

        let err = store.set_theme(7, "neon").unwrap_err();
        assert_eq!(err, PrefsError::UnknownTheme("neon".to_string()));
        assert_eq!(store.theme_id(7), "purple");
    }

    #[test]
    fn users_are_independent() {
        let store = PreferenceStore::new();
        store.set_theme(1, "purple").unwrap();
        assert_eq!(store.theme_id(1), "purple");
        assert_eq!(store.theme_id(2), theme::DEFAULT_THEME);
    }
}
