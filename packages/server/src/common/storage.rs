//! Key/value session storage.
//!
//! Stands in for browser local storage: auth tokens, recent searches and the
//! one-shot signals search forms raise for listing pages all live here under
//! the fixed keys in [`keys`].

use std::collections::HashMap;
use std::sync::RwLock;

pub mod keys {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const USER: &str = "user";
    pub const SHOULD_SCROLL_TO_RESULTS: &str = "nc_should_scroll_to_results";
    pub const RECENT_LOCATION_SEARCHES: &str = "recentLocationSearches";
    pub const RECENT_RESTAURANT_SEARCHES: &str = "recentRestaurantSearches";
}

pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);

    /// Remove and return the value in one step.
    fn take(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.take(key);
    }

    fn take(&self, key: &str) -> Option<String> {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(key)
    }
}

/// Raise a one-shot signal.
pub fn raise_flag(store: &dyn SessionStore, key: &str) {
    store.set(key, "true".to_string());
}

/// Read and clear a one-shot signal. Returns true at most once per raise.
pub fn take_flag(store: &dyn SessionStore, key: &str) -> bool {
    store.take(key).is_some_and(|v| v == "true")
}
