use super::super::cache::{AdaptiveCache, CachedOwners, OwnerCacheMetrics, OwnerCacheStats, EMPTY_OWNERS};
use async_trait::async_trait;
use kube_owners_application::ports::{ObjectFetcher, OwnerReferenceProvider};
use kube_owners_domain::config::owner_cache::DEFAULT_CAPACITY;
use kube_owners_domain::{DomainError, ObjectRef, ObjectUid, OwnerCacheConfig, OwnerRef};
use std::num::NonZeroUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{debug, info, warn};

const DEFAULT_STORE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
    Some(capacity) => capacity,
    None => panic!("default owner cache capacity must be non-zero"),
};

/// Cache decorator for object owner lookups
///
/// Wraps an `ObjectFetcher` and memoizes the owners of each object by uid,
/// including "not found" outcomes. Other lookup failures are never cached.
pub struct OwnerReferenceCache {
    fetcher: Option<Arc<dyn ObjectFetcher>>,
    store: AdaptiveCache<ObjectUid, CachedOwners>,
    metrics: Arc<OwnerCacheMetrics>,
}

impl OwnerReferenceCache {
    /// Wrap a fetcher with a store of `capacity` entries.
    ///
    /// A zero capacity is a construction failure; the owning component
    /// should refuse to start.
    pub fn new(fetcher: Arc<dyn ObjectFetcher>, capacity: usize) -> Result<Self, DomainError> {
        let store = AdaptiveCache::with_capacity(capacity)?;
        info!(capacity = capacity, "Initializing owner reference cache");

        Ok(Self {
            fetcher: Some(fetcher),
            store,
            metrics: Arc::new(OwnerCacheMetrics::default()),
        })
    }

    pub fn from_config(
        fetcher: Arc<dyn ObjectFetcher>,
        config: &OwnerCacheConfig,
    ) -> Result<Self, DomainError> {
        Self::new(fetcher, config.capacity)
    }

    /// Cache pre-populated with fixed entries and no fetcher.
    ///
    /// Lookups for seeded uids are served from the store; any other lookup
    /// fails with `FetcherUnavailable`.
    pub fn seeded<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ObjectUid, Vec<OwnerRef>)>,
    {
        let store = AdaptiveCache::new(DEFAULT_STORE_CAPACITY);
        for (uid, owners) in entries {
            store.insert(uid, CachedOwners::Owners(owners.into()));
        }

        Self {
            fetcher: None,
            store,
            metrics: Arc::new(OwnerCacheMetrics::default()),
        }
    }

    /// Owners of `reference`, served from the store when possible.
    pub async fn get_owner_references(
        &self,
        reference: &ObjectRef,
    ) -> Result<Arc<[OwnerRef]>, DomainError> {
        if !reference.has_uid() {
            debug!(object = %reference, "Reference has no uid, bypassing owner cache");
            return self.fetch_uncached(reference).await;
        }

        if let Some(cached) = self.store.get(&reference.uid) {
            self.metrics.hits.fetch_add(1, Ordering::Relaxed);
            debug!(
                uid = %reference.uid,
                kind = %reference.kind,
                name = %reference.name,
                negative = cached.is_negative(),
                "Owner cache HIT"
            );
            return Ok(cached.owners());
        }

        self.metrics.misses.fetch_add(1, Ordering::Relaxed);
        debug!(
            uid = %reference.uid,
            kind = %reference.kind,
            name = %reference.name,
            "Owner cache MISS"
        );

        let fetcher = self.fetcher()?;
        self.metrics.fetches.fetch_add(1, Ordering::Relaxed);

        match fetcher.fetch(reference).await {
            Ok(object) => {
                if let Some(uid) = object.uid.as_ref().filter(|uid| !uid.is_empty()) {
                    if *uid != reference.uid {
                        debug!(
                            uid = %reference.uid,
                            current_uid = %uid,
                            object = %reference,
                            "Object was recreated under the same name, caching as not found"
                        );
                        return Ok(self.store_negative(reference));
                    }
                }

                let owners: Arc<[OwnerRef]> = object.owner_references.into();
                self.store
                    .insert(reference.uid.clone(), CachedOwners::Owners(Arc::clone(&owners)));
                self.metrics.positive_inserts.fetch_add(1, Ordering::Relaxed);
                Ok(owners)
            }
            Err(e) if e.is_not_found() => {
                debug!(uid = %reference.uid, object = %reference, "Object not found, caching negative entry");
                Ok(self.store_negative(reference))
            }
            Err(e) => {
                self.metrics.lookup_failures.fetch_add(1, Ordering::Relaxed);
                warn!(
                    uid = %reference.uid,
                    object = %reference,
                    error = %e,
                    "Owner lookup failed, not caching"
                );
                Err(e)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Whether `uid` currently has a resident entry. Does not count as an access.
    pub fn contains(&self, uid: &ObjectUid) -> bool {
        self.store.contains(uid)
    }

    pub fn metrics(&self) -> Arc<OwnerCacheMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn stats(&self) -> OwnerCacheStats {
        let store = self.store.snapshot();
        OwnerCacheStats {
            entries: store.len,
            capacity: store.capacity,
            hits: self.metrics.hits.load(Ordering::Relaxed),
            misses: self.metrics.misses.load(Ordering::Relaxed),
            fetches: self.metrics.fetches.load(Ordering::Relaxed),
            positive_inserts: self.metrics.positive_inserts.load(Ordering::Relaxed),
            negative_inserts: self.metrics.negative_inserts.load(Ordering::Relaxed),
            lookup_failures: self.metrics.lookup_failures.load(Ordering::Relaxed),
            evictions: store.evictions,
            ghost_hits: store.ghost_hits,
            target_recent: store.target_recent,
            hit_rate: self.metrics.hit_rate(),
        }
    }

    fn fetcher(&self) -> Result<&Arc<dyn ObjectFetcher>, DomainError> {
        self.fetcher.as_ref().ok_or(DomainError::FetcherUnavailable)
    }

    fn store_negative(&self, reference: &ObjectRef) -> Arc<[OwnerRef]> {
        self.store.insert(reference.uid.clone(), CachedOwners::NotFound);
        self.metrics.negative_inserts.fetch_add(1, Ordering::Relaxed);
        Arc::clone(&EMPTY_OWNERS)
    }

    async fn fetch_uncached(&self, reference: &ObjectRef) -> Result<Arc<[OwnerRef]>, DomainError> {
        let fetcher = self.fetcher()?;
        self.metrics.fetches.fetch_add(1, Ordering::Relaxed);

        match fetcher.fetch(reference).await {
            Ok(object) => Ok(object.owner_references.into()),
            Err(e) if e.is_not_found() => Ok(Arc::clone(&EMPTY_OWNERS)),
            Err(e) => {
                self.metrics.lookup_failures.fetch_add(1, Ordering::Relaxed);
                warn!(object = %reference, error = %e, "Owner lookup failed");
                Err(e)
            }
        }
    }
}

#[async_trait]
impl OwnerReferenceProvider for OwnerReferenceCache {
    async fn get_owner_references(
        &self,
        reference: &ObjectRef,
    ) -> Result<Arc<[OwnerRef]>, DomainError> {
        OwnerReferenceCache::get_owner_references(self, reference).await
    }
}
