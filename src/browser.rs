use web_sys::window;

use crate::config;
use crate::theme::{ColorSchemeSignal, MarkerError, PreferenceStore, StoreError, Theme, ThemeMarker};

/// `window.localStorage`. Private browsing and disabled storage surface as
/// `StoreError`s rather than panics.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(|e| StoreError::Access(format!("{:?}", e)))?
            .ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Access(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Access(format!("{:?}", e)))
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`. Reports light when the
/// query API is missing.
pub struct MediaColorScheme;

impl ColorSchemeSignal for MediaColorScheme {
    fn prefers_dark(&self) -> bool {
        window()
            .and_then(|w| w.match_media(config::DARK_SCHEME_QUERY).ok())
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}

/// The `<html>` element.
pub struct DocumentRoot;

impl ThemeMarker for DocumentRoot {
    fn mark(&self, theme: Theme) -> Result<(), MarkerError> {
        let root = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or(MarkerError)?;
        root.set_attribute(config::THEME_ATTRIBUTE, theme.as_str())
            .map_err(|_| MarkerError)
    }
}

pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}
