//! Light/dark theme preference.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Color theme of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value.  Missing or unrecognized values read
    /// as `fallback`.
    #[must_use]
    pub fn from_stored(value: Option<&str>, fallback: Self) -> Self {
        match value {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => fallback,
        }
    }

    /// The value persisted for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label for the toggle button, naming the theme a click
    /// switches to.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_parse() {
        assert_eq!(Theme::from_stored(Some("dark"), Theme::Light), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light"), Theme::Dark), Theme::Light);
    }

    #[test]
    fn unknown_or_missing_values_use_fallback() {
        assert_eq!(Theme::from_stored(Some("DARK"), Theme::Light), Theme::Light);
        assert_eq!(Theme::from_stored(Some(""), Theme::Dark), Theme::Dark);
        assert_eq!(Theme::from_stored(None, Theme::Light), Theme::Light);
    }

    #[test]
    fn as_str_round_trips_through_from_stored() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_str()), theme.toggled()), theme);
        }
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
        let parsed: Theme = serde_json::from_str(r#""light""#).unwrap();
        assert_eq!(parsed, Theme::Light);
    }
}
