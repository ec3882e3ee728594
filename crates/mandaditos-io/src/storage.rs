//! Theme preference persistence and application.
//!
//! The theme is the only persisted state: one `localStorage` entry
//! read at startup and written on every toggle.  Applying a theme sets
//! the `data-theme` attribute on the document element, which the
//! stylesheet keys its color variables on.

use mandaditos_staging::Theme;
use wasm_bindgen::JsValue;

/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Errors that can occur when reading or writing browser state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A browser API call returned an error or a required object was missing.
    #[error("storage API error: {0}")]
    JsError(String),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Read the stored theme, falling back to `fallback` when nothing
/// usable is stored or storage is unavailable (e.g. private browsing).
#[must_use]
pub fn load_theme(key: &str, fallback: Theme) -> Theme {
    match read_item(key) {
        Ok(stored) => Theme::from_stored(stored.as_deref(), fallback),
        Err(e) => {
            web_sys::console::warn_1(&format!("could not read theme preference: {e}").into());
            fallback
        }
    }
}

/// Persist `theme` under `key`.
///
/// # Errors
///
/// Returns [`StorageError::JsError`] if `localStorage` is unavailable or
/// the write is refused (e.g. quota exceeded).
pub fn save_theme(key: &str, theme: Theme) -> Result<(), StorageError> {
    local_storage()?.set_item(key, theme.as_str())?;
    Ok(())
}

/// Set the theme attribute on the document element.
///
/// # Errors
///
/// Returns [`StorageError::JsError`] if there is no document element or
/// the attribute cannot be set.
pub fn apply_theme(theme: Theme) -> Result<(), StorageError> {
    document_element()?.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    Ok(())
}

/// Read an attribute of the document element, if present.
///
/// # Errors
///
/// Returns [`StorageError::JsError`] if there is no document element.
pub fn document_attribute(name: &str) -> Result<Option<String>, StorageError> {
    Ok(document_element()?.get_attribute(name))
}

fn read_item(key: &str) -> Result<Option<String>, StorageError> {
    Ok(local_storage()?.get_item(key)?)
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window =
        web_sys::window().ok_or_else(|| StorageError::JsError("no global window".into()))?;
    window
        .local_storage()?
        .ok_or_else(|| StorageError::JsError("localStorage is unavailable".into()))
}

fn document_element() -> Result<web_sys::Element, StorageError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or_else(|| StorageError::JsError("no document element".into()))
}
