pub mod arc;
pub mod data;
pub mod metrics;

pub use arc::{AdaptiveCache, StoreSnapshot};
pub use data::{CachedOwners, EMPTY_OWNERS};
pub use metrics::{OwnerCacheMetrics, OwnerCacheStats};
