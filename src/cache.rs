//! In-memory caching for repeated player queries.
//!
//! One process-wide LRU keyed by the full query shape plus the owning
//! database handle. Writes land in bulk (a whole feed per import), so any
//! write clears the cache outright instead of invalidating per key.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, Mutex};

use crate::cli::types::{Position, Season};
use crate::model::PlayerRecord;

/// Cache key for stored player queries: the owning database handle, the
/// season, and every filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerQueryKey {
    /// Tag of the database handle the query ran against, so results from
    /// different open databases never alias.
    pub db: u64,
    pub season: Season,
    pub team: Option<String>,
    pub nation: Option<String>,
    pub position: Option<Position>,
    pub name: Option<String>,
}

/// LRU cache over filtered query results.
pub struct QueryCache {
    entries: Arc<Mutex<LruCache<PlayerQueryKey, Vec<PlayerRecord>>>>,
    capacity: usize,
}

impl QueryCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).unwrap(),
            ))),
            capacity,
        }
    }

    pub fn get(&self, key: &PlayerQueryKey) -> Option<Vec<PlayerRecord>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn put(&self, key: PlayerQueryKey, records: Vec<PlayerRecord>) {
        self.entries.lock().unwrap().put(key, records);
    }

    /// Drops every entry. Called after any write to the store.
    pub fn invalidate(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// (entries in use, capacity)
    pub fn stats(&self) -> (usize, usize) {
        let entries = self.entries.lock().unwrap();
        (entries.len(), self.capacity)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Process-wide query cache instance.
pub static QUERY_CACHE: LazyLock<QueryCache> = LazyLock::new(QueryCache::default);

static NEXT_HANDLE_TAG: AtomicU64 = AtomicU64::new(0);

/// Hands out the tag a new database handle uses in [`PlayerQueryKey::db`].
pub fn next_handle_tag() -> u64 {
    NEXT_HANDLE_TAG.fetch_add(1, Ordering::Relaxed)
}
