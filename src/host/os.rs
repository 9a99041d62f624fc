//! Ambient appearance signals.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::AmbientAppearanceSignal;

/// Function consulted by [`OsAppearance`]; returns `true` for a dark preference.
pub type AppearanceDetector = fn() -> bool;

static APPEARANCE_DETECTOR: Lazy<Mutex<AppearanceDetector>> =
    Lazy::new(|| Mutex::new(os_prefers_dark));

/// Overrides the detector used by [`OsAppearance`].
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_appearance_detector(detector: AppearanceDetector) {
    let mut guard = APPEARANCE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the `dark-light` detector after [`set_appearance_detector`].
pub fn reset_appearance_detector() {
    set_appearance_detector(os_prefers_dark);
}

fn current_detector() -> AppearanceDetector {
    *APPEARANCE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn os_prefers_dark() -> bool {
    match detect_os_mode() {
        OsMode::Dark => true,
        OsMode::Light => false,
    }
}

/// The operating system's color mode, as reported by `dark-light`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsAppearance;

impl OsAppearance {
    pub fn new() -> Self {
        Self
    }
}

impl AmbientAppearanceSignal for OsAppearance {
    fn prefers_dark(&self) -> bool {
        let dark = current_detector()();
        tracing::debug!(dark, "sampled os appearance");
        dark
    }
}

/// A constant ambient signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedAppearance {
    dark: bool,
}

impl FixedAppearance {
    pub fn new(prefers_dark: bool) -> Self {
        Self { dark: prefers_dark }
    }

    pub fn dark() -> Self {
        Self::new(true)
    }

    pub fn light() -> Self {
        Self::new(false)
    }
}

impl AmbientAppearanceSignal for FixedAppearance {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}
