//! TTL-based caching of catalog snapshots.

use crate::api::types::CatalogSnapshot;
use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A session key derived from the bearer token, used for cache lookups and
/// locking.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct SessionKey(String);

impl SessionKey {
    /// Creates a session key from a raw bearer token.
    ///
    /// The token is hashed so the cache never stores credentials.
    pub fn from_token(token: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        let result = hasher.finalize();
        // Use first 16 bytes as hex string
        let hash = hex::encode(&result[..16]);
        Self(hash)
    }

    /// Returns the internal hash string (for logging/debugging).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Only show first 8 chars for privacy
        write!(f, "{}...", &self.0[..8.min(self.0.len())])
    }
}

/// A cached snapshot with metadata.
#[derive(Clone)]
struct CachedSnapshot {
    result: CatalogSnapshot,
    cached_at: Instant,
    ttl: Duration,
}

/// Thread-safe cache for catalog snapshots.
///
/// Uses DashMap for concurrent access without external locking.
pub struct CatalogCache {
    entries: DashMap<SessionKey, CachedSnapshot>,
    default_ttl: Duration,
}

impl CatalogCache {
    /// Creates a new cache with the specified default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
        }
    }

    /// Creates a cache with a 5-minute default TTL.
    pub fn with_default_ttl() -> Self {
        Self::new(Duration::from_secs(5 * 60))
    }

    /// Gets a cached snapshot if it exists and hasn't expired.
    pub fn get(&self, key: &SessionKey) -> Option<CatalogSnapshot> {
        self.entries.get(key).and_then(|entry| {
            if entry.cached_at.elapsed() < entry.ttl {
                Some(entry.result.clone())
            } else {
                // Entry expired, remove it
                drop(entry);
                self.entries.remove(key);
                None
            }
        })
    }

    /// Inserts a snapshot into the cache with the default TTL.
    pub fn insert(&self, key: SessionKey, result: CatalogSnapshot) {
        self.insert_with_ttl(key, result, self.default_ttl);
    }

    /// Inserts a snapshot with a custom TTL.
    pub fn insert_with_ttl(&self, key: SessionKey, result: CatalogSnapshot, ttl: Duration) {
        self.entries.insert(
            key,
            CachedSnapshot {
                result,
                cached_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Invalidates (removes) a cached entry.
    pub fn invalidate(&self, key: &SessionKey) {
        self.entries.remove(key);
    }

    /// Clears all entries from the cache.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes expired entries from the cache.
    pub fn cleanup_expired(&self) {
        self.entries
            .retain(|_, entry| entry.cached_at.elapsed() < entry.ttl);
    }

    /// Gets cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut total = 0;
        let mut expired = 0;

        for entry in self.entries.iter() {
            total += 1;
            if entry.cached_at.elapsed() >= entry.ttl {
                expired += 1;
            }
        }

        CacheStats {
            total_entries: total,
            expired_entries: expired,
            active_entries: total - expired,
        }
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::with_default_ttl()
    }
}

/// Cache statistics for monitoring.
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
    pub active_entries: usize,
}

/// Helper module for hex encoding (avoiding extra dependency).
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

/// Shared state combining the cache with per-session fetch locks, so two
/// concurrent requests for the same session trigger one upstream fetch.
pub struct CatalogCacheState {
    pub cache: CatalogCache,
    pub session_locks: DashMap<SessionKey, Arc<tokio::sync::Mutex<()>>>,
}

impl CatalogCacheState {
    pub fn new() -> Self {
        Self {
            cache: CatalogCache::with_default_ttl(),
            session_locks: DashMap::new(),
        }
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            cache: CatalogCache::new(ttl),
            session_locks: DashMap::new(),
        }
    }

    /// Gets or creates a lock for the given session.
    pub fn get_session_lock(&self, key: &SessionKey) -> Arc<tokio::sync::Mutex<()>> {
        self.session_locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }
}

impl Default for CatalogCacheState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot {
            disciplines: Vec::new(),
            timetables: Vec::new(),
            fetched_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_session_key_hashing() {
        let key1 = SessionKey::from_token("token123");
        let key2 = SessionKey::from_token("token123");
        let key3 = SessionKey::from_token("token456");

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
        assert_ne!(key1.as_str(), "token123");
    }

    #[test]
    fn test_expired_entries_are_evicted_on_get() {
        let cache = CatalogCache::new(Duration::from_secs(60));
        let key = SessionKey::from_token("t");

        cache.insert_with_ttl(key.clone(), snapshot(), Duration::from_secs(0));
        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_and_clear() {
        let cache = CatalogCache::with_default_ttl();
        let key = SessionKey::from_token("t");

        cache.insert(key.clone(), snapshot());
        assert!(cache.get(&key).is_some());

        cache.invalidate(&key);
        assert!(cache.get(&key).is_none());

        cache.insert(key.clone(), snapshot());
        cache.clear();
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_stats_count_expired() {
        let cache = CatalogCache::with_default_ttl();
        cache.insert_with_ttl(
            SessionKey::from_token("fresh"),
            snapshot(),
            Duration::from_secs(60),
        );
        cache.insert_with_ttl(
            SessionKey::from_token("stale"),
            snapshot(),
            Duration::from_secs(0),
        );

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.expired_entries, 1);
        assert_eq!(stats.active_entries, 1);

        cache.cleanup_expired();
        assert_eq!(cache.len(), 1);
    }
}
