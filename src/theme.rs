//! Light/dark theme resolution and persistence.
//!
//! The in-memory [`Theme`] is authoritative for the session. The durable
//! store and the document marker are best-effort mirrors of it: every fault
//! on either side is dropped where it happens.

use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Accepts exactly `"light"` or `"dark"`. Anything else counts as unset.
    pub fn from_stored(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("preference store unavailable")]
    Unavailable,
    #[error("preference store access failed: {0}")]
    Access(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("document root element missing")]
pub struct MarkerError;

/// Durable key-value store for the theme preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Environment hint: does the user prefer dark presentation system-wide.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}

/// Attribute on the document root that style rules key off.
pub trait ThemeMarker {
    fn mark(&self, theme: Theme) -> Result<(), MarkerError>;
}

/// Picks the theme for a fresh page load: a valid stored value wins, then a
/// dark environment signal, then light.
pub fn resolve_initial(store: &impl PreferenceStore, env: &impl ColorSchemeSignal) -> Theme {
    let stored = store
        .get(crate::config::THEME_STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|value| Theme::from_stored(&value));

    match stored {
        Some(theme) => theme,
        None if env.prefers_dark() => Theme::Dark,
        None => Theme::default(),
    }
}

/// Mirrors `theme` onto the document marker and the durable store.
pub fn apply(theme: Theme, marker: &impl ThemeMarker, store: &impl PreferenceStore) {
    let _ = marker.mark(theme);
    let _ = store.set(crate::config::THEME_STORAGE_KEY, theme.as_str());
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryStore {
        pub values: RefCell<HashMap<String, String>>,
        pub writes: RefCell<Vec<String>>,
        pub fail_reads: bool,
        pub fail_writes: bool,
    }

    impl MemoryStore {
        pub fn holding(value: &str) -> Self {
            let store = MemoryStore::default();
            store
                .values
                .borrow_mut()
                .insert(crate::config::THEME_STORAGE_KEY.to_string(), value.to_string());
            store
        }

        pub fn stored(&self) -> Option<String> {
            self.values
                .borrow()
                .get(crate::config::THEME_STORAGE_KEY)
                .cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            if self.fail_reads {
                return Err(StoreError::Access("SecurityError".to_string()));
            }
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError::Access("QuotaExceededError".to_string()));
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            self.writes.borrow_mut().push(value.to_string());
            Ok(())
        }
    }

    pub struct Env(pub bool);

    impl ColorSchemeSignal for Env {
        fn prefers_dark(&self) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    pub struct RecordingRoot {
        pub marks: RefCell<Vec<Theme>>,
    }

    impl RecordingRoot {
        pub fn current(&self) -> Option<Theme> {
            self.marks.borrow().last().copied()
        }
    }

    impl ThemeMarker for RecordingRoot {
        fn mark(&self, theme: Theme) -> Result<(), MarkerError> {
            self.marks.borrow_mut().push(theme);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::{Env, MemoryStore, RecordingRoot};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stored_value_wins_over_environment() {
        for (stored, expected) in [("light", Theme::Light), ("dark", Theme::Dark)] {
            for env in [true, false] {
                let store = MemoryStore::holding(stored);
                assert_eq!(resolve_initial(&store, &Env(env)), expected);
            }
        }
    }

    #[test]
    fn no_stored_value_follows_dark_environment() {
        let store = MemoryStore::default();
        assert_eq!(resolve_initial(&store, &Env(true)), Theme::Dark);
    }

    #[test]
    fn no_stored_value_and_light_environment_defaults_to_light() {
        let store = MemoryStore::default();
        assert_eq!(resolve_initial(&store, &Env(false)), Theme::Light);
    }

    #[test]
    fn unreadable_store_falls_back_to_environment() {
        let store = MemoryStore {
            fail_reads: true,
            ..MemoryStore::holding("light")
        };
        assert_eq!(resolve_initial(&store, &Env(true)), Theme::Dark);
        assert_eq!(resolve_initial(&store, &Env(false)), Theme::Light);
    }

    #[test]
    fn corrupt_value_is_treated_like_absent() {
        for junk in ["", "Dark", "DARK", " light", "blue", "{\"theme\":\"dark\"}"] {
            let store = MemoryStore::holding(junk);
            assert_eq!(resolve_initial(&store, &Env(true)), Theme::Dark, "{junk:?}");
            assert_eq!(resolve_initial(&store, &Env(false)), Theme::Light, "{junk:?}");
        }
    }

    #[test]
    fn apply_marks_root_and_persists() {
        let store = MemoryStore::default();
        let root = RecordingRoot::default();

        apply(Theme::Dark, &root, &store);

        assert_eq!(root.current(), Some(Theme::Dark));
        assert_eq!(store.stored().as_deref(), Some("dark"));
    }

    #[test]
    fn write_failure_still_marks_root() {
        let store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };
        let root = RecordingRoot::default();

        apply(Theme::Dark, &root, &store);

        assert_eq!(root.current(), Some(Theme::Dark));
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn double_toggle_is_identity_and_every_step_is_mirrored() {
        for start in [Theme::Light, Theme::Dark] {
            let store = MemoryStore::default();
            let root = RecordingRoot::default();

            let mut theme = start;
            apply(theme, &root, &store);
            theme = theme.toggled();
            apply(theme, &root, &store);
            assert_eq!(root.current(), Some(theme));
            theme = theme.toggled();
            apply(theme, &root, &store);

            assert_eq!(theme, start);
            assert_eq!(*root.marks.borrow(), vec![start, start.toggled(), start]);
            assert_eq!(
                *store.writes.borrow(),
                vec![
                    start.as_str().to_string(),
                    start.toggled().as_str().to_string(),
                    start.as_str().to_string(),
                ]
            );
        }
    }

    #[test]
    fn dark_environment_toggle_then_reload() {
        let store = MemoryStore::default();
        let root = RecordingRoot::default();

        let theme = resolve_initial(&store, &Env(true));
        apply(theme, &root, &store);
        assert_eq!(root.current(), Some(Theme::Dark));

        let theme = theme.toggled();
        apply(theme, &root, &store);
        assert_eq!(root.current(), Some(Theme::Light));
        assert_eq!(store.stored().as_deref(), Some("light"));

        // Same store, fresh page.
        let reloaded_root = RecordingRoot::default();
        let theme = resolve_initial(&store, &Env(true));
        apply(theme, &reloaded_root, &store);
        assert_eq!(reloaded_root.current(), Some(Theme::Light));
    }

    #[test]
    fn theme_strings() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
    }
}
