//! Adaptive replacement cache (ARC).
//!
//! Resident entries live in two LRU lists: `t1` holds keys seen once
//! recently, `t2` holds keys seen at least twice. Keys evicted from either
//! list are remembered (without values) in the ghost lists `b1` and `b2`.
//! A ghost hit in `b1` grows the recency target `p`, a ghost hit in `b2`
//! shrinks it, so the split between `t1` and `t2` follows the workload.
//!
//! All state sits behind one mutex. The critical sections are pure
//! in-memory list updates; callers never hold the guard across I/O.

use kube_owners_domain::DomainError;
use lru::LruCache;
use rustc_hash::FxBuildHasher;
use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

type List<K, V> = LruCache<K, V, FxBuildHasher>;

/// Point-in-time view of the store, captured under the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub len: usize,
    pub capacity: usize,
    pub recent_len: usize,
    pub frequent_len: usize,
    /// Adaptive target size for the recency list.
    pub target_recent: usize,
    pub evictions: u64,
    pub ghost_hits: u64,
}

struct ArcState<K, V> {
    size: usize,
    p: usize,
    t1: List<K, V>,
    t2: List<K, V>,
    b1: List<K, ()>,
    b2: List<K, ()>,
    evictions: u64,
    ghost_hits: u64,
}

impl<K: Hash + Eq + Clone, V: Clone> ArcState<K, V> {
    fn new(capacity: NonZeroUsize) -> Self {
        Self {
            size: capacity.get(),
            p: 0,
            t1: LruCache::with_hasher(capacity, FxBuildHasher),
            t2: LruCache::with_hasher(capacity, FxBuildHasher),
            b1: LruCache::with_hasher(capacity, FxBuildHasher),
            b2: LruCache::with_hasher(capacity, FxBuildHasher),
            evictions: 0,
            ghost_hits: 0,
        }
    }

    fn resident(&self) -> usize {
        self.t1.len() + self.t2.len()
    }

    fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized + ToOwned<Owned = K>,
    {
        // Second access promotes from recency to frequency.
        if let Some(value) = self.t1.pop(key) {
            self.t2.put(key.to_owned(), value.clone());
            return Some(value);
        }
        self.t2.get(key).cloned()
    }

    fn insert(&mut self, key: K, value: V) {
        if self.t1.pop(&key).is_some() {
            self.t2.put(key, value);
            return;
        }

        if self.t2.contains(&key) {
            self.t2.put(key, value);
            return;
        }

        if self.b1.contains(&key) {
            self.ghost_hits += 1;
            let (b1_len, b2_len) = (self.b1.len(), self.b2.len());
            let delta = if b2_len > b1_len { b2_len / b1_len } else { 1 };
            self.p = (self.p + delta).min(self.size);

            if self.resident() >= self.size {
                self.replace(false);
            }
            self.b1.pop(&key);
            self.t2.put(key, value);
            return;
        }

        if self.b2.contains(&key) {
            self.ghost_hits += 1;
            let (b1_len, b2_len) = (self.b1.len(), self.b2.len());
            let delta = if b1_len > b2_len { b1_len / b2_len } else { 1 };
            self.p = self.p.saturating_sub(delta);

            if self.resident() >= self.size {
                self.replace(true);
            }
            self.b2.pop(&key);
            self.t2.put(key, value);
            return;
        }

        if self.resident() >= self.size {
            self.replace(false);
        }
        if self.b1.len() > self.size - self.p {
            self.b1.pop_lru();
        }
        if self.b2.len() > self.p {
            self.b2.pop_lru();
        }
        self.t1.put(key, value);
    }

    /// Moves one resident entry to its ghost list.
    fn replace(&mut self, b2_hit: bool) {
        let t1_len = self.t1.len();
        let from_recent = (t1_len > 0 && (t1_len > self.p || (t1_len == self.p && b2_hit)))
            || self.t2.is_empty();

        let evicted = if from_recent {
            self.t1.pop_lru().map(|(key, _)| self.b1.push(key, ()))
        } else {
            self.t2.pop_lru().map(|(key, _)| self.b2.push(key, ()))
        };

        if evicted.is_some() {
            self.evictions += 1;
        }
    }

    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.b1.pop(key);
        self.b2.pop(key);
        self.t1.pop(key).or_else(|| self.t2.pop(key))
    }

    fn purge(&mut self) {
        self.t1.clear();
        self.t2.clear();
        self.b1.clear();
        self.b2.clear();
        self.p = 0;
    }
}

/// Capacity-bounded key-value store with adaptive eviction.
///
/// Safe for concurrent use: every operation takes the internal guard for
/// the duration of the list update only. Values are cloned out, so they
/// should be cheap to clone (`Arc`-backed).
pub struct AdaptiveCache<K, V> {
    state: Mutex<ArcState<K, V>>,
    capacity: NonZeroUsize,
}

impl<K: Hash + Eq + Clone, V: Clone> AdaptiveCache<K, V> {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            state: Mutex::new(ArcState::new(capacity)),
            capacity,
        }
    }

    /// Fails with `InvalidCacheCapacity` for a zero capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self, DomainError> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or(DomainError::InvalidCacheCapacity(capacity))
    }

    // A panic while holding the guard leaves the lists structurally valid;
    // the store only holds soft state, so keep serving.
    fn lock(&self) -> MutexGuard<'_, ArcState<K, V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the value and records the access.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized + ToOwned<Owned = K>,
    {
        self.lock().get(key)
    }

    /// Returns the value without touching recency or frequency.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let state = self.lock();
        state.t1.peek(key).or_else(|| state.t2.peek(key)).cloned()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let state = self.lock();
        state.t1.contains(key) || state.t2.contains(key)
    }

    /// Inserts or replaces `key`, evicting one entry when full.
    pub fn insert(&self, key: K, value: V) {
        self.lock().insert(key, value);
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().remove(key)
    }

    /// Drops every resident and ghost entry and resets the target.
    pub fn purge(&self) {
        self.lock().purge();
    }

    pub fn len(&self) -> usize {
        self.lock().resident()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.lock();
        StoreSnapshot {
            len: state.resident(),
            capacity: state.size,
            recent_len: state.t1.len(),
            frequent_len: state.t2.len(),
            target_recent: state.p,
            evictions: state.evictions,
            ghost_hits: state.ghost_hits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize) -> AdaptiveCache<String, u32> {
        AdaptiveCache::with_capacity(capacity).unwrap()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = AdaptiveCache::<String, u32>::with_capacity(0);
        assert!(matches!(result, Err(DomainError::InvalidCacheCapacity(0))));
    }

    #[test]
    fn test_insert_and_get() {
        let cache = cache(4);
        cache.insert("a".to_string(), 1);
        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn test_second_access_promotes_to_frequent() {
        let cache = cache(4);
        cache.insert("a".to_string(), 1);
        assert_eq!(cache.snapshot().recent_len, 1);

        cache.get("a");
        let snapshot = cache.snapshot();
        assert_eq!(snapshot.recent_len, 0);
        assert_eq!(snapshot.frequent_len, 1);
    }

    #[test]
    fn test_peek_does_not_promote() {
        let cache = cache(4);
        cache.insert("a".to_string(), 1);
        assert_eq!(cache.peek("a"), Some(1));
        assert_eq!(cache.snapshot().frequent_len, 0);
    }

    #[test]
    fn test_reinsert_replaces_value() {
        let cache = cache(4);
        cache.insert("a".to_string(), 1);
        cache.insert("a".to_string(), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.peek("a"), Some(2));
    }

    #[test]
    fn test_resident_entries_never_exceed_capacity() {
        let cache = cache(8);
        for i in 0..100u32 {
            cache.insert(format!("key-{i}"), i);
            if i % 3 == 0 {
                cache.get(&format!("key-{}", i / 2));
            }
            assert!(cache.len() <= 8);
        }
        assert_eq!(cache.len(), 8);
        assert_eq!(cache.snapshot().evictions, 92);
    }

    #[test]
    fn test_frequent_entries_survive_scan() {
        let cache = cache(4);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.get("a");
        cache.get("b");

        for key in ["c", "d", "e", "f", "g"] {
            cache.insert(key.to_string(), 0);
        }

        assert!(cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(!cache.contains("c"));
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_recent_ghost_hit_grows_target() {
        let cache = cache(2);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        // evicts "a" into the recency ghost list
        cache.insert("c".to_string(), 3);
        assert!(!cache.contains("a"));

        cache.insert("a".to_string(), 1);

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.target_recent, 1);
        assert_eq!(snapshot.ghost_hits, 1);
        assert_eq!(snapshot.frequent_len, 1);
        assert!(cache.contains("a"));
        assert!(cache.contains("c"));
        assert!(!cache.contains("b"));
    }

    #[test]
    fn test_frequent_ghost_hit_shrinks_target() {
        let cache = cache(2);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.insert("c".to_string(), 3); // a -> b1
        cache.insert("a".to_string(), 1); // b1 hit, p = 1, b -> b1, a in t2
        cache.insert("d".to_string(), 4); // t1 = [c] == p, evicts a from t2 -> b2
        assert!(!cache.contains("a"));
        assert_eq!(cache.snapshot().target_recent, 1);

        cache.insert("a".to_string(), 1); // b2 hit

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.target_recent, 0);
        assert_eq!(snapshot.ghost_hits, 2);
        assert!(cache.contains("a"));
        assert_eq!(snapshot.len, 2);
    }

    #[test]
    fn test_remove_and_purge() {
        let cache = cache(4);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);

        assert_eq!(cache.remove("a"), Some(1));
        assert!(!cache.contains("a"));
        assert_eq!(cache.len(), 1);

        cache.purge();
        assert!(cache.is_empty());
        assert_eq!(cache.snapshot().target_recent, 0);
    }
}
