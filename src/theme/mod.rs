//! Theme preference for a UI session.
//!
//! This module provides:
//!
//! - [`Theme`]: The two-variant light/dark appearance value
//! - [`ThemePreferenceStore`]: Derives, toggles, and synchronizes the theme
//! - [`PreferenceSource`]: Which precedence step produced the initial theme
//! - [`StoreConfig`]: Storage key and document flag naming
//!
//! The store talks to its surroundings only through the capability traits in
//! [`crate::host`].

mod config;
mod store;
#[allow(clippy::module_inception)]
mod theme;

pub use config::{StoreConfig, DEFAULT_DARK_CLASS, DEFAULT_STORAGE_KEY};
pub use store::{PreferenceSource, SubscriptionId, ThemePreferenceStore};
pub use theme::{Theme, UnknownTheme};
