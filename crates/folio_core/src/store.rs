//! Preference storage
//!
//! A string key/value store for the handful of user choices the page keeps
//! between visits (theme, language). Browsers back this with
//! `localStorage`; tests and headless runs use [`MemoryStore`].
//!
//! Writes never fail from the caller's point of view: a backend that cannot
//! persist logs the problem and carries on, since losing a preference must
//! not break the page.

use rustc_hash::FxHashMap;

/// String key/value preference storage
pub trait PreferenceStore {
    /// Read a stored value
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str);

    /// Remove a stored value
    fn remove(&mut self, key: &str);
}

/// In-memory preference store
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `(key, value)` pairs
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        tracing::trace!("MemoryStore: {} = {}", key, value);
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
