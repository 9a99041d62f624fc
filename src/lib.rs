//! # duskmode
//!
//! A persisted light/dark theme preference plus two small HTML components.
//!
//! ## Theme preference
//!
//! [`ThemePreferenceStore`] derives the session's [`Theme`] from, in order:
//!
//! 1. the value persisted under the `"theme"` key,
//! 2. the host's ambient "prefers dark" signal,
//! 3. [`Theme::Light`].
//!
//! Host facilities are injected through a [`Host`] bundle of capability traits,
//! so the store runs the same against a browser bridge, a file on disk, or the
//! in-memory fakes used in tests.
//!
//! ```rust
//! use duskmode::{FixedAppearance, Host, MemoryDocument, MemoryStorage, Theme, ThemePreferenceStore};
//!
//! let storage = MemoryStorage::new();
//! let document = MemoryDocument::new();
//! let host = Host::new(storage.clone(), document.clone(), FixedAppearance::dark());
//!
//! let mut store = ThemePreferenceStore::new(Some(host));
//! assert_eq!(store.theme(), Theme::Dark);
//! assert!(document.has_class("dark"));
//!
//! store.toggle();
//! assert_eq!(store.theme(), Theme::Light);
//! assert_eq!(storage.value("theme").as_deref(), Some("light"));
//! ```
//!
//! ## Components
//!
//! [`ComponentRenderer`] renders [`Message`] banners and [`Separator`] rules
//! to HTML.
//!
//! ```rust
//! use duskmode::{ComponentRenderer, Message};
//!
//! let renderer = ComponentRenderer::new().unwrap();
//! let html = renderer.message(Some(&Message::error("failed"))).unwrap();
//! assert!(html.contains("text-red-500"));
//! assert_eq!(renderer.message(None).unwrap(), "");
//! ```

mod error;
pub mod host;
pub mod render;
pub mod style;
pub mod theme;

pub use error::StorageError;
pub use host::{
    reset_appearance_detector, set_appearance_detector, AmbientAppearanceSignal,
    DocumentStyleController, FileStorage, FixedAppearance, Host, MemoryDocument, MemoryStorage,
    OsAppearance, PreferenceStorage,
};
pub use render::{ComponentRenderer, Message, MessageKind, Orientation, Separator};
pub use style::class_names;
pub use theme::{
    PreferenceSource, StoreConfig, SubscriptionId, Theme, ThemePreferenceStore, UnknownTheme,
};
