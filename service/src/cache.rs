use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// A fixed-TTL in-memory cache for listing responses.
///
/// Entries expire a constant duration after insertion; there is no other
/// eviction policy. The cache only affects read freshness: claim and other
/// write paths invalidate their resource prefix so the next listing re-reads
/// the database.
pub struct ReadCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

struct CacheEntry {
    inserted_at: Instant,
    value: Value,
}

impl ReadCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key` if it is still fresh.
    pub fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(key)?;
        if entry.inserted_at.elapsed() < self.ttl {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, key: String, value: Value) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                key,
                CacheEntry {
                    inserted_at: Instant::now(),
                    value,
                },
            );
        }
    }

    /// Drops every entry whose key starts with `prefix`. Write paths call
    /// this with their resource name, e.g. "venues".
    pub fn invalidate_prefix(&self, prefix: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|key, _| !key.starts_with(prefix));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_returns_fresh_entries_and_drops_expired_ones() {
        let cache = ReadCache::new(Duration::from_millis(20));
        cache.insert("venues?city=Vienna".to_string(), json!([{"name": "Stadttheater"}]));

        assert!(cache.get("venues?city=Vienna").is_some());

        std::thread::sleep(Duration::from_millis(30));
        assert!(cache.get("venues?city=Vienna").is_none());
    }

    #[test]
    fn invalidate_prefix_only_touches_matching_keys() {
        let cache = ReadCache::new(Duration::from_secs(60));
        cache.insert("venues?page=0".to_string(), json!([]));
        cache.insert("events?page=0".to_string(), json!([]));

        cache.invalidate_prefix("venues");

        assert!(cache.get("venues?page=0").is_none());
        assert!(cache.get("events?page=0").is_some());
    }
}
