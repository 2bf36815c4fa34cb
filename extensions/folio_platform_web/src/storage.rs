//! `localStorage` preference store

use folio_core::PreferenceStore;
use web_sys::{Storage, Window};

/// Preferences kept in the browser's `localStorage`
///
/// Values are stored as plain strings. When storage is unavailable
/// (privacy mode, sandboxed frames) reads return nothing and writes are
/// dropped.
#[derive(Clone, Debug)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                tracing::warn!("LocalStore: localStorage unavailable");
                None
            }
            Err(err) => {
                tracing::warn!("LocalStore: localStorage blocked: {:?}", err);
                None
            }
        };
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                tracing::warn!("LocalStore: failed to store {}: {:?}", key, err);
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.remove_item(key) {
                tracing::warn!("LocalStore: failed to remove {}: {:?}", key, err);
            }
        }
    }
}
