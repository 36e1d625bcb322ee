//! Cache Store Module
//!
//! Main cache engine: a sharded concurrent map with TTL expiration and
//! atomic integer counters.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::cache::{current_timestamp_ms, CacheEntry, CacheStats, StatsCounters};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Thread-safe cache storage with TTL support.
///
/// Entries live in a `DashMap`, so operations on keys in different shards
/// never contend. Every operation on a single key runs under that key's
/// shard lock, which makes each call atomic for the key it touches.
///
/// Expired entries are never returned. They are removed lazily when an
/// operation encounters them, and in bulk by [`CacheStore::cleanup_expired`].
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: DashMap<String, CacheEntry>,
    /// Performance statistics
    stats: StatsCounters,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with DashMap's default shard count.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            stats: StatsCounters::new(),
        }
    }

    /// Creates an empty store with an explicit shard count.
    ///
    /// The count is rounded up to a power of two, between 2 and 1024.
    pub fn with_shards(shards: usize) -> Self {
        Self {
            entries: DashMap::with_shard_amount(normalize_shards(shards)),
            stats: StatsCounters::new(),
        }
    }

    // == Set ==
    /// Stores a value, replacing any existing entry for the key.
    ///
    /// A `ttl_seconds` of zero stores the value without expiry, which also
    /// clears the expiry of a previously expiring entry.
    pub fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()> {
        ensure_key(key)?;

        self.entries
            .insert(key.to_string(), CacheEntry::new(value, ttl_seconds));
        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Absent and expired keys both yield `CacheError::NotFound`. An expired
    /// entry found here is removed.
    pub fn get(&self, key: &str) -> Result<String> {
        ensure_key(key)?;

        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.stats.record_hit();
                return Ok(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.remove_if_expired(key);
        }
        self.stats.record_miss();
        Err(CacheError::NotFound(key.to_string()))
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Deleting an absent or expired key succeeds. Returns whether a live
    /// entry was removed.
    pub fn delete(&self, key: &str) -> Result<bool> {
        ensure_key(key)?;

        match self.entries.remove(key) {
            Some((_, entry)) if entry.is_expired() => {
                self.stats.record_expirations(1);
                Ok(false)
            }
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }

    // == Increment ==
    /// Adds `delta` to the integer stored under `key` and returns the total.
    ///
    /// An absent or expired key counts as zero and is created without
    /// expiry. An existing entry keeps its expiry.
    pub fn increment(&self, key: &str, delta: i64) -> Result<i64> {
        self.update_counter(key, |current| current.checked_add(delta))
    }

    // == Decrement ==
    /// Subtracts `delta` from the integer stored under `key` and returns the total.
    pub fn decrement(&self, key: &str, delta: i64) -> Result<i64> {
        self.update_counter(key, |current| current.checked_sub(delta))
    }

    /// Read-modify-write of a counter under the key's shard lock.
    fn update_counter<F>(&self, key: &str, apply: F) -> Result<i64>
    where
        F: FnOnce(i64) -> Option<i64>,
    {
        ensure_key(key)?;
        let overflow = || CacheError::Overflow(key.to_string());

        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired() {
                    let total = apply(0).ok_or_else(overflow)?;
                    occupied.insert(CacheEntry::new(total.to_string(), 0));
                    self.stats.record_expirations(1);
                    return Ok(total);
                }

                let current = occupied
                    .get()
                    .as_counter()
                    .ok_or_else(|| CacheError::TypeMismatch(key.to_string()))?;
                let total = apply(current).ok_or_else(overflow)?;
                occupied.get_mut().value = total.to_string();
                Ok(total)
            }
            Entry::Vacant(vacant) => {
                let total = apply(0).ok_or_else(overflow)?;
                vacant.insert(CacheEntry::new(total.to_string(), 0));
                Ok(total)
            }
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        let now = current_timestamp_ms();
        let mut removed = 0;

        self.entries.retain(|_, entry| {
            let expired = entry.is_expired_at(now);
            if expired {
                removed += 1;
            }
            !expired
        });

        self.stats.record_expirations(removed as u64);
        removed
    }

    // == Length ==
    /// Returns the current number of entries, including expired entries
    /// not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes `key` only if it is still expired under the shard lock, so a
    /// concurrent Set that replaced it is left alone.
    fn remove_if_expired(&self, key: &str) {
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired())
            .is_some()
        {
            self.stats.record_expirations(1);
        }
    }
}

fn ensure_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::EmptyKey);
    }
    Ok(())
}

/// Upper bound on the shard table size
const MAX_SHARDS: usize = 1024;

fn normalize_shards(shards: usize) -> usize {
    shards.clamp(2, MAX_SHARDS).next_power_of_two()
}
