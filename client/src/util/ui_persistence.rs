//! Browser localStorage persistence for editor preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The preferences modal reads and writes through `PreferenceStore`. In the
//! browser each `(scope, name)` pair is stored as its own JSON entry; outside
//! the browser (SSR, tests) the in-memory layer is all there is.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: a missing or full localStorage only loses
//! persistence across reloads, never the value for the current session.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use boxcontrol::prefs::{MemoryPreferences, PreferenceStore};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

const KEY_PREFIX: &str = "boxcontrol.preferences";

/// localStorage key for a preference.
pub fn storage_key(scope: &str, name: &str) -> String {
    format!("{KEY_PREFIX}:{scope}:{name}")
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring malformed stored preference {key}: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("failed to persist preference {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Preference store backed by localStorage with an in-memory layer on top.
#[derive(Debug, Clone, Default)]
pub struct LocalStoragePreferences {
    session: MemoryPreferences,
}

impl LocalStoragePreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, scope: &str, name: &str) -> Option<Value> {
        self.session.get(scope, name).or_else(|| load_json(&storage_key(scope, name)))
    }

    fn set(&mut self, scope: &str, name: &str, value: Value) {
        save_json(&storage_key(scope, name), &value);
        self.session.set(scope, name, value);
    }
}
