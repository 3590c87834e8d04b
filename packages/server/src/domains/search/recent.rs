//! Recently used search terms, newest first, kept in the session store as a
//! JSON array.

use tracing::debug;

use crate::common::storage::keys;
use crate::common::SessionStore;

pub const MAX_RECENT: usize = 5;

pub struct RecentSearches<'a> {
    store: &'a dyn SessionStore,
    key: &'static str,
}

impl<'a> RecentSearches<'a> {
    pub fn restaurants(store: &'a dyn SessionStore) -> Self {
        Self {
            store,
            key: keys::RECENT_RESTAURANT_SEARCHES,
        }
    }

    pub fn locations(store: &'a dyn SessionStore) -> Self {
        Self {
            store,
            key: keys::RECENT_LOCATION_SEARCHES,
        }
    }

    pub fn list(&self) -> Vec<String> {
        let Some(raw) = self.store.get(self.key) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            debug!(key = self.key, error = %e, "Discarding unreadable recent searches");
            Vec::new()
        })
    }

    /// Move `term` to the front. Case-insensitive duplicates are replaced and
    /// blank terms ignored.
    pub fn push(&self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }

        let mut entries = self.list();
        entries.retain(|existing| !existing.eq_ignore_ascii_case(term));
        entries.insert(0, term.to_string());
        entries.truncate(MAX_RECENT);

        if let Ok(raw) = serde_json::to_string(&entries) {
            self.store.set(self.key, raw);
        }
    }

    pub fn clear(&self) {
        self.store.remove(self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::InMemoryStore;

    #[test]
    fn newest_first_without_duplicates() {
        let store = InMemoryStore::new();
        let recent = RecentSearches::restaurants(&store);

        recent.push("Thai");
        recent.push("Pizza");
        recent.push("thai");

        assert_eq!(recent.list(), vec!["thai", "Pizza"]);
    }

    #[test]
    fn capped_at_five() {
        let store = InMemoryStore::new();
        let recent = RecentSearches::locations(&store);
        for term in ["a", "b", "c", "d", "e", "f"] {
            recent.push(term);
        }
        assert_eq!(recent.list(), vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn blank_terms_and_corrupt_storage() {
        let store = InMemoryStore::new();
        store.set(keys::RECENT_RESTAURANT_SEARCHES, "{not json".to_string());
        let recent = RecentSearches::restaurants(&store);

        assert!(recent.list().is_empty());
        recent.push("   ");
        assert!(recent.list().is_empty());

        recent.push("Ramen");
        recent.clear();
        assert!(recent.list().is_empty());
    }
}
