pub mod cache;
pub mod resolver;

pub use cache::{AdaptiveCache, CachedOwners, OwnerCacheMetrics, OwnerCacheStats, StoreSnapshot};
pub use resolver::{KubeObjectFetcher, OwnerReferenceCache};
