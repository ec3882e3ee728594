//! Upload form configuration.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Edge length of the preview box, matching the server's thumbnails.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 150;

/// Default cap on the combined size of staged files (1 GiB).
pub const DEFAULT_MAX_STAGED_BYTES: u64 = 1 << 30;

/// Smallest useful display limit: one character plus the `"..."` suffix.
pub const MIN_NAME_DISPLAY_LIMIT: usize = 4;

/// Errors reported by [`UploadConfig::validate`] and
/// [`UploadConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON could not be parsed into a configuration.
    #[error("failed to parse upload configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the form cannot work with.
    #[error("invalid upload configuration: {0}")]
    Invalid(String),
}

/// Settings for the upload form.
///
/// Every field has a default, so a JSON override only needs to name
/// the fields it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Path the multipart form is posted to.
    pub endpoint: String,

    /// Form field name repeated once per file.
    pub field_name: String,

    /// Edge length in pixels of the square box image thumbnails fit in.
    pub thumbnail_size: u32,

    /// Most bytes the working set may hold at once.  Files beyond it
    /// are refused when picked instead of being read.
    pub max_staged_bytes: u64,

    /// Longest file name shown in a preview label before truncation.
    pub name_display_limit: usize,

    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,

    /// Theme used when no preference has been stored.
    pub default_theme: Theme,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "/upload".to_owned(),
            field_name: "file".to_owned(),
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            max_staged_bytes: DEFAULT_MAX_STAGED_BYTES,
            name_display_limit: 30,
            theme_storage_key: "theme".to_owned(),
            default_theme: Theme::Light,
        }
    }
}

impl UploadConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".into()));
        }
        if self.field_name.is_empty() {
            return Err(ConfigError::Invalid("field_name must not be empty".into()));
        }
        if self.thumbnail_size == 0 {
            return Err(ConfigError::Invalid(
                "thumbnail_size must be at least 1".into(),
            ));
        }
        if self.max_staged_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_staged_bytes must be at least 1".into(),
            ));
        }
        if self.name_display_limit < MIN_NAME_DISPLAY_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "name_display_limit must be at least {MIN_NAME_DISPLAY_LIMIT}, got {}",
                self.name_display_limit
            )));
        }
        if self.theme_storage_key.is_empty() {
            return Err(ConfigError::Invalid(
                "theme_storage_key must not be empty".into(),
            ));
        }
        Ok(())
    }
}
