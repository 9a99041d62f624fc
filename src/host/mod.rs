//! Host capabilities the theme store depends on.
//!
//! The store never reaches for a global environment. Everything it touches is
//! one of three capabilities, bundled into a [`Host`]:
//!
//! - [`PreferenceStorage`]: durable string key-value store
//! - [`DocumentStyleController`]: the document-level style flag
//! - [`AmbientAppearanceSignal`]: the host's "prefers dark" signal
//!
//! Passing no `Host` at all models a pre-render context where none of these
//! facilities exist.
//!
//! Implementations provided here:
//!
//! - [`MemoryStorage`] / [`MemoryDocument`]: shared in-memory state, cheap to clone
//! - [`FileStorage`]: JSON file on disk
//! - [`FixedAppearance`]: a constant ambient signal
//! - [`OsAppearance`]: the operating system's color mode

mod file;
mod memory;
mod os;

pub use file::FileStorage;
pub use memory::{MemoryDocument, MemoryStorage};
pub use os::{
    reset_appearance_detector, set_appearance_detector, AppearanceDetector, FixedAppearance,
    OsAppearance,
};

use crate::error::StorageError;

/// A durable string key-value store.
pub trait PreferenceStorage {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Idempotent control over classes on the root display context.
pub trait DocumentStyleController {
    fn add_class(&mut self, name: &str);
    fn remove_class(&mut self, name: &str);
    fn has_class(&self, name: &str) -> bool;
}

/// Whether the host prefers a dark appearance.
///
/// Sampled once, when a store is created.
pub trait AmbientAppearanceSignal {
    fn prefers_dark(&self) -> bool;
}

/// The set of host facilities handed to a
/// [`ThemePreferenceStore`](crate::ThemePreferenceStore).
pub struct Host {
    pub(crate) storage: Box<dyn PreferenceStorage>,
    pub(crate) document: Box<dyn DocumentStyleController>,
    pub(crate) ambient: Box<dyn AmbientAppearanceSignal>,
}

impl Host {
    /// Bundles the three capabilities.
    pub fn new(
        storage: impl PreferenceStorage + 'static,
        document: impl DocumentStyleController + 'static,
        ambient: impl AmbientAppearanceSignal + 'static,
    ) -> Self {
        Self {
            storage: Box::new(storage),
            document: Box::new(document),
            ambient: Box::new(ambient),
        }
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}
