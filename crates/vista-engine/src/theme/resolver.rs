use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

use super::{ResolvedTheme, ThemeMode, ThemeSurface};

/// Storage key used when the configuration does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "theme-storage";

/// On-disk shape of the theme preference.
///
/// `resolved_theme` is written for other readers of the store but is never
/// read back: it is recomputed from the live signal on every load.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTheme {
    pub mode: ThemeMode,
    pub resolved_theme: ResolvedTheme,
}

/// The only part of a stored record that is trusted.
#[derive(Deserialize)]
struct StoredMode {
    mode: ThemeMode,
}

/// Owner of the theme state.
///
/// Mode changes go through [`set_mode`](Self::set_mode) and
/// [`toggle`](Self::toggle); platform changes through
/// [`on_system_signal`](Self::on_system_signal). Each one recomputes the
/// resolved theme, applies it to the surface and persists the mode before
/// returning. None of them can fail: storage errors are logged and dropped.
pub struct ThemeResolver {
    mode: ThemeMode,
    resolved: ResolvedTheme,
    system_prefers_dark: Option<bool>,
    storage_key: String,
    store: Box<dyn KeyValueStore>,
    surface: Box<dyn ThemeSurface>,
}

impl ThemeResolver {
    /// Cold start: reads the persisted mode (dark if none), resolves it
    /// against `system_prefers_dark` and applies the result.
    pub fn load(
        store: Box<dyn KeyValueStore>,
        surface: Box<dyn ThemeSurface>,
        system_prefers_dark: Option<bool>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let mode = read_mode(store.as_ref(), &storage_key).unwrap_or_default();

        let mut this = Self {
            mode,
            resolved: mode.resolve(system_prefers_dark),
            system_prefers_dark,
            storage_key,
            store,
            surface,
        };
        log::debug!("theme loaded: mode={} resolved={}", this.mode, this.resolved);
        this.enter(mode);
        this
    }

    #[inline]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[inline]
    pub fn resolved(&self) -> ResolvedTheme {
        self.resolved
    }

    /// Last platform preference seen, whatever the current mode.
    #[inline]
    pub fn system_prefers_dark(&self) -> Option<bool> {
        self.system_prefers_dark
    }

    /// Moves to `mode` unconditionally.
    pub fn set_mode(&mut self, mode: ThemeMode) -> ResolvedTheme {
        if mode != self.mode {
            log::debug!("theme mode {} -> {}", self.mode, mode);
        }
        self.enter(mode);
        self.resolved
    }

    /// Advances the Dark → Light → System cycle from the current mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set_mode(self.mode.next());
        self.mode
    }

    /// Records a platform preference change. Re-resolves and applies only
    /// while the mode is `System`; returns whether it did.
    pub fn on_system_signal(&mut self, prefers_dark: Option<bool>) -> bool {
        self.system_prefers_dark = prefers_dark;
        if self.mode != ThemeMode::System {
            return false;
        }
        log::debug!("system preference now {prefers_dark:?}");
        self.enter(ThemeMode::System);
        true
    }

    /// Entry action shared by every transition.
    fn enter(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.resolved = mode.resolve(self.system_prefers_dark);
        self.surface.apply(self.resolved);
        self.persist();
    }

    fn persist(&mut self) {
        let record = PersistedTheme { mode: self.mode, resolved_theme: self.resolved };
        let result = serde_json::to_string(&record)
            .map_err(Into::into)
            .and_then(|json| self.store.set(&self.storage_key, json));
        if let Err(e) = result {
            log::warn!("failed to persist theme under {:?}: {e}", self.storage_key);
        }
    }
}

fn read_mode(store: &dyn KeyValueStore, key: &str) -> Option<ThemeMode> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("failed to read theme from {key:?}: {e}");
            return None;
        }
    };
    match serde_json::from_str::<StoredMode>(&raw) {
        Ok(stored) => Some(stored.mode),
        Err(e) => {
            log::warn!("ignoring unreadable theme record under {key:?}: {e}");
            None
        }
    }
}
