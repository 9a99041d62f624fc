//! The session's theme preference.

use crate::host::Host;

use super::config::StoreConfig;
use super::theme::Theme;

/// Which precedence step produced a store's initial theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceSource {
    /// A recognized value was found in storage.
    Persisted,
    /// Nothing usable was stored; the ambient signal decided.
    Ambient,
    /// No host was available.
    Default,
}

/// Handle returned by [`ThemePreferenceStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(Theme)>;

/// Owns the current [`Theme`] for one UI session.
///
/// The initial value comes from storage, then the host's ambient signal, then
/// [`Theme::Light`]. Every change is mirrored into storage and the document's
/// dark flag before [`toggle`](Self::toggle) returns.
///
/// # Example
///
/// ```rust
/// use duskmode::{FixedAppearance, Host, MemoryDocument, MemoryStorage, PreferenceSource, Theme, ThemePreferenceStore};
///
/// let storage = MemoryStorage::with_value("theme", "dark");
/// let host = Host::new(storage.clone(), MemoryDocument::new(), FixedAppearance::light());
///
/// let store = ThemePreferenceStore::new(Some(host));
/// assert_eq!(store.theme(), Theme::Dark);
/// assert_eq!(store.source(), PreferenceSource::Persisted);
/// ```
pub struct ThemePreferenceStore {
    theme: Theme,
    source: PreferenceSource,
    host: Option<Host>,
    config: StoreConfig,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ThemePreferenceStore {
    /// Creates a store with the default [`StoreConfig`].
    ///
    /// Pass `None` when no host facilities exist (e.g. pre-rendering); the
    /// store then starts [`Theme::Light`] and touches nothing.
    pub fn new(host: Option<Host>) -> Self {
        Self::with_config(host, StoreConfig::default())
    }

    /// Creates a store with an explicit configuration.
    pub fn with_config(host: Option<Host>, config: StoreConfig) -> Self {
        let (theme, source) = match &host {
            Some(host) => resolve_initial(host, &config),
            None => (Theme::Light, PreferenceSource::Default),
        };
        tracing::debug!(%theme, ?source, "resolved initial theme");

        let mut store = Self {
            theme,
            source,
            host,
            config,
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        store.sync();
        store
    }

    /// Works out the theme a new store would start with, without writing to
    /// storage or the document.
    pub fn resolve(host: &Host, config: &StoreConfig) -> (Theme, PreferenceSource) {
        resolve_initial(host, config)
    }

    /// Returns the current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns where the initial theme came from.
    pub fn source(&self) -> PreferenceSource {
        self.source
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Switches to the other theme and returns it.
    ///
    /// Storage and the document flag are updated, then subscribers are
    /// notified, all before this returns.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        tracing::trace!(theme = %self.theme, "toggled theme");
        self.sync();

        let theme = self.theme;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(theme);
        }
        theme
    }

    /// Writes the current theme to the document flag and storage.
    ///
    /// Idempotent. Does nothing without a host. Storage failures are logged
    /// and otherwise ignored.
    pub fn sync(&mut self) {
        let Some(host) = self.host.as_mut() else {
            return;
        };
        let flag = self.config.flag();
        if self.theme.is_dark() {
            host.document.add_class(flag);
        } else {
            host.document.remove_class(flag);
        }
        if let Err(e) = host.storage.set(self.config.key(), self.theme.as_str()) {
            tracing::warn!(error = %e, theme = %self.theme, "failed to persist theme");
        }
    }

    /// Registers a callback run with the new theme after each toggle.
    pub fn subscribe(&mut self, callback: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }
}

impl std::fmt::Debug for ThemePreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreferenceStore")
            .field("theme", &self.theme)
            .field("source", &self.source)
            .field("config", &self.config)
            .field("has_host", &self.host.is_some())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn resolve_initial(host: &Host, config: &StoreConfig) -> (Theme, PreferenceSource) {
    match host.storage.get(config.key()) {
        Ok(Some(raw)) => match Theme::from_stored(&raw) {
            Some(theme) => return (theme, PreferenceSource::Persisted),
            None => tracing::debug!(value = %raw, "ignoring unrecognized stored theme"),
        },
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "failed to read stored theme"),
    }

    let theme = if host.ambient.prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    };
    (theme, PreferenceSource::Ambient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{FixedAppearance, MemoryDocument, MemoryStorage};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn host_with(storage: &MemoryStorage, document: &MemoryDocument, dark: bool) -> Host {
        Host::new(
            storage.clone(),
            document.clone(),
            FixedAppearance::new(dark),
        )
    }

    #[test]
    fn test_no_host_defaults_to_light() {
        let mut store = ThemePreferenceStore::new(None);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.source(), PreferenceSource::Default);

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_ambient_dark_without_stored_value() {
        let storage = MemoryStorage::new();
        let document = MemoryDocument::new();
        let store = ThemePreferenceStore::new(Some(host_with(&storage, &document, true)));

        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.source(), PreferenceSource::Ambient);
        assert!(document.has_class("dark"));
        assert_eq!(storage.value("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_stored_value_wins_over_ambient() {
        let storage = MemoryStorage::with_value("theme", "light");
        let document = MemoryDocument::new();
        let store = ThemePreferenceStore::new(Some(host_with(&storage, &document, true)));

        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.source(), PreferenceSource::Persisted);
        assert!(!document.has_class("dark"));
    }

    #[test]
    fn test_unrecognized_stored_value_falls_through() {
        let storage = MemoryStorage::with_value("theme", "midnight");
        let document = MemoryDocument::new();
        let store = ThemePreferenceStore::new(Some(host_with(&storage, &document, true)));

        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.source(), PreferenceSource::Ambient);
        assert_eq!(storage.value("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_read_failure_falls_through() {
        let storage = MemoryStorage::with_value("theme", "dark");
        storage.fail_reads(true);
        let document = MemoryDocument::new();
        let store = ThemePreferenceStore::new(Some(host_with(&storage, &document, false)));

        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.source(), PreferenceSource::Ambient);
    }

    #[test]
    fn test_write_failure_does_not_block_toggle() {
        let storage = MemoryStorage::new();
        storage.fail_writes(true);
        let document = MemoryDocument::new();
        let mut store = ThemePreferenceStore::new(Some(host_with(&storage, &document, false)));

        assert_eq!(store.toggle(), Theme::Dark);
        assert!(document.has_class("dark"));
        assert_eq!(storage.value("theme"), None);
    }

    #[test]
    fn test_toggle_updates_flag_and_storage() {
        let storage = MemoryStorage::new();
        let document = MemoryDocument::new();
        let mut store = ThemePreferenceStore::new(Some(host_with(&storage, &document, true)));

        assert_eq!(store.toggle(), Theme::Light);
        assert!(!document.has_class("dark"));
        assert_eq!(storage.value("theme").as_deref(), Some("light"));

        assert_eq!(store.toggle(), Theme::Dark);
        assert!(document.has_class("dark"));
        assert_eq!(storage.value("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_sync_is_idempotent() {
        let storage = MemoryStorage::new();
        let document = MemoryDocument::new();
        let mut store = ThemePreferenceStore::new(Some(host_with(&storage, &document, true)));

        let classes = document.classes();
        let stored = storage.value("theme");
        store.sync();
        store.sync();
        assert_eq!(document.classes(), classes);
        assert_eq!(storage.value("theme"), stored);
    }

    #[test]
    fn test_custom_config_names() {
        let storage = MemoryStorage::with_value("app.theme", "dark");
        let document = MemoryDocument::new();
        let config = StoreConfig::new()
            .storage_key("app.theme")
            .dark_class("night");
        let mut store =
            ThemePreferenceStore::with_config(Some(host_with(&storage, &document, false)), config);

        assert_eq!(store.theme(), Theme::Dark);
        assert!(document.has_class("night"));
        assert!(!document.has_class("dark"));

        store.toggle();
        assert_eq!(storage.value("app.theme").as_deref(), Some("light"));
        assert_eq!(storage.value("theme"), None);
    }

    #[test]
    fn test_subscribers_see_synchronized_state() {
        let storage = MemoryStorage::new();
        let document = MemoryDocument::new();
        let mut store = ThemePreferenceStore::new(Some(host_with(&storage, &document, false)));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let (seen_cb, storage_cb, document_cb) = (seen.clone(), storage.clone(), document.clone());
        store.subscribe(move |theme| {
            seen_cb.borrow_mut().push((
                theme,
                storage_cb.value("theme"),
                document_cb.has_class("dark"),
            ));
        });

        store.toggle();
        assert_eq!(
            *seen.borrow(),
            vec![(Theme::Dark, Some("dark".to_string()), true)]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = ThemePreferenceStore::new(None);
        let count = Rc::new(RefCell::new(0));
        let count_cb = count.clone();
        let id = store.subscribe(move |_| *count_cb.borrow_mut() += 1);

        store.toggle();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_subscribers_run_in_registration_order() {
        let mut store = ThemePreferenceStore::new(None);
        let order = Rc::new(RefCell::new(Vec::new()));
        let ids: Vec<SubscriptionId> = (0..3)
            .map(|index| {
                let order_cb = order.clone();
                store.subscribe(move |_| order_cb.borrow_mut().push(index))
            })
            .collect();

        store.toggle();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);

        order.borrow_mut().clear();
        assert!(store.unsubscribe(ids[1]));
        store.toggle();
        assert_eq!(*order.borrow(), vec![0, 2]);
    }

    #[test]
    fn test_resolve_has_no_side_effects() {
        let storage = MemoryStorage::new();
        let document = MemoryDocument::new();
        let host = host_with(&storage, &document, true);

        let resolved = ThemePreferenceStore::resolve(&host, &StoreConfig::default());
        assert_eq!(resolved, (Theme::Dark, PreferenceSource::Ambient));
        assert_eq!(storage.value("theme"), None);
        assert!(!document.has_class("dark"));
    }

    #[test]
    fn test_subscribers_not_called_at_init() {
        let mut store = ThemePreferenceStore::new(None);
        let called = Rc::new(RefCell::new(false));
        let called_cb = called.clone();
        store.subscribe(move |_| *called_cb.borrow_mut() = true);
        assert!(!*called.borrow());
    }
}
