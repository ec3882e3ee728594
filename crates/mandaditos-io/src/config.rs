//! Page-level configuration loading.
//!
//! The hosting page may override upload settings by putting a JSON
//! object in the `data-upload-config` attribute of `<html>`.  Missing
//! fields keep their defaults; an unreadable override is reported to
//! the console and ignored.

use mandaditos_staging::UploadConfig;

use crate::storage;

/// Attribute on `<html>` holding the JSON configuration override.
pub const CONFIG_ATTRIBUTE: &str = "data-upload-config";

/// Load the upload configuration for this page.
#[must_use]
pub fn load_config() -> UploadConfig {
    let raw = match storage::document_attribute(CONFIG_ATTRIBUTE) {
        Ok(Some(raw)) => raw,
        Ok(None) => return UploadConfig::default(),
        Err(e) => {
            web_sys::console::warn_1(&format!("could not read upload configuration: {e}").into());
            return UploadConfig::default();
        }
    };

    UploadConfig::from_json(&raw).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("{e}; using defaults").into());
        UploadConfig::default()
    })
}
