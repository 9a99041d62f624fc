//! Store configuration.

/// Storage key the theme is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Document class present while the dark theme is active.
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// Names used by a [`ThemePreferenceStore`](super::ThemePreferenceStore)
/// when touching host storage and the document.
///
/// # Example
///
/// ```rust
/// use duskmode::StoreConfig;
///
/// let config = StoreConfig::new()
///     .storage_key("app.theme")
///     .dark_class("theme-dark");
/// assert_eq!(config.key(), "app.theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    storage_key: String,
    dark_class: String,
}

impl StoreConfig {
    /// Creates the default configuration (`"theme"` key, `"dark"` class).
    pub fn new() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
        }
    }

    /// Sets the storage key, returning the updated config for chaining.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the document class used as the dark flag.
    pub fn dark_class(mut self, class: impl Into<String>) -> Self {
        self.dark_class = class.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.storage_key
    }

    pub fn flag(&self) -> &str {
        &self.dark_class
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
