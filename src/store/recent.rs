//! Recent-search register: a deduplicating, most-recent-first list of past
//! search terms, capped at [`RECENT_CAP`] entries and persisted after every
//! mutation.

use crate::store::KvStore;

pub const RECENT_KEY: &str = "recentSearches";
pub const RECENT_CAP: usize = 6;

/// Load the stored list. Missing or unparsable storage is an empty list,
/// never an error.
pub fn load(store: &dyn KvStore) -> Vec<String> {
    store
        .get(RECENT_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Record a search term: drop any exact-match duplicate, insert at the
/// front, truncate to the cap, persist, and return the updated list.
pub fn record(store: &mut dyn KvStore, term: &str) -> Vec<String> {
    let mut items = load(store);
    items.retain(|t| t != term);
    items.insert(0, term.to_string());
    items.truncate(RECENT_CAP);

    match serde_json::to_string(&items) {
        Ok(json) => store.set(RECENT_KEY, &json),
        Err(e) => tracing::warn!(error = %e, "Failed to encode recent searches"),
    }
    items
}
