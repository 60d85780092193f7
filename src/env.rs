//! The Env store: a mutex-guarded key-value collection.
//!
//! `Env` is safe for concurrent access from multiple threads. Every operation
//! takes one coarse lock for its full duration, so each get/set/merge is
//! atomic with respect to the others. Keys and values are both plain strings;
//! callers needing typed values convert at the point of use.

use parking_lot::Mutex;
use std::collections::HashMap;

/// A collection of environment variables loaded from env source files.
///
/// Created empty (via `Env::new` or `Default`) or populated by
/// [`crate::loader::load`]. Keys are unique; a later `set` for an existing
/// key replaces the earlier value.
#[derive(Debug, Default)]
pub struct Env {
    /// Guarded map of variable name to value.
    vars: Mutex<HashMap<String, String>>,
}

impl Env {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the value of `key`.
    ///
    /// Returns an empty string when the key is absent. Absence is not an
    /// error; a missing key and a key with an empty value are
    /// indistinguishable through this accessor.
    pub fn get(&self, key: &str) -> String {
        self.vars.lock().get(key).cloned().unwrap_or_default()
    }

    /// Insert or overwrite `key` unconditionally.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.lock().insert(key.into(), value.into());
    }

    /// Number of distinct keys in the store.
    pub fn count(&self) -> usize {
        self.vars.lock().len()
    }

    /// All keys, in unspecified order.
    pub fn keys(&self) -> Vec<String> {
        self.vars.lock().keys().cloned().collect()
    }

    /// All values, in unspecified order.
    pub fn values(&self) -> Vec<String> {
        self.vars.lock().values().cloned().collect()
    }

    /// Snapshot of all key-value pairs, sorted by key for stable rendering.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = self
            .vars
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    /// Merge all of `other`'s entries into this store.
    ///
    /// Keys absent here are always added. Keys already present are replaced
    /// only when `overwrite` is true; otherwise the existing value is kept.
    /// Entries of this store not present in `other` are untouched.
    ///
    /// `other` is snapshotted before this store's lock is taken, so merging
    /// a store into itself is safe (and leaves it unchanged).
    pub fn merge(&self, other: &Env, overwrite: bool) {
        let snapshot: Vec<(String, String)> = other
            .vars
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let mut vars = self.vars.lock();
        for (key, value) in snapshot {
            if vars.contains_key(&key) && !overwrite {
                continue;
            }
            vars.insert(key, value);
        }
    }

    /// Report which of `required` are missing or empty.
    ///
    /// The returned keys preserve the relative order of `required`. A key
    /// present with a non-empty value is not reported. An empty result means
    /// every requested key is set.
    pub fn check_required(&self, required: &[&str]) -> Vec<String> {
        let vars = self.vars.lock();
        required
            .iter()
            .filter(|key| vars.get(**key).map_or(true, |v| v.is_empty()))
            .map(|key| (*key).to_string())
            .collect()
    }
}
