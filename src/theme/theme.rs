//! The light/dark theme value.

use std::fmt;
use std::str::FromStr;

/// The session's appearance.
///
/// Persisted as the literal strings `"light"` and `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Parses a stored value, returning `None` for anything that isn't
    /// exactly `"light"` or `"dark"`.
    pub fn from_stored(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that names no theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_stored_strings() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
    }

    #[test]
    fn test_unrecognized_values_are_rejected() {
        for raw in ["", "Dark", " dark", "dark ", "system", "null"] {
            assert_eq!(Theme::from_stored(raw), None, "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_parse_error_names_value() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert_eq!(err, UnknownTheme("sepia".into()));
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }
}
