use kube_owners_domain::OwnerRef;
use std::sync::{Arc, LazyLock};

pub static EMPTY_OWNERS: LazyLock<Arc<[OwnerRef]>> = LazyLock::new(|| Arc::from([]));

/// Cached outcome of an owner lookup.
#[derive(Clone, Debug)]
pub enum CachedOwners {
    /// The object exists; its declared owners (possibly none).
    Owners(Arc<[OwnerRef]>),

    /// The object was not found; remembered to skip repeated lookups.
    NotFound,
}

impl CachedOwners {
    pub fn is_negative(&self) -> bool {
        matches!(self, CachedOwners::NotFound)
    }

    /// Owners to report to callers. A negative entry reports none.
    pub fn owners(&self) -> Arc<[OwnerRef]> {
        match self {
            CachedOwners::Owners(owners) => Arc::clone(owners),
            CachedOwners::NotFound => Arc::clone(&EMPTY_OWNERS),
        }
    }
}
