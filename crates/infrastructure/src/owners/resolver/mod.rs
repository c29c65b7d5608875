//! Owner resolution with a cache decorator
//!
//! - **Cache**: memoizes owners per uid, including not-found outcomes (outermost)
//! - **Kube fetcher**: fetches objects from the cluster through the dynamic API (innermost)
//!
//! ## Example Usage
//!
//! ```no_run
//! use kube_owners_infrastructure::owners::resolver::{KubeObjectFetcher, OwnerReferenceCache};
//! use std::sync::Arc;
//!
//! # async fn run(client: kube::Client) -> Result<(), kube_owners_domain::DomainError> {
//! let cache = OwnerReferenceCache::new(Arc::new(KubeObjectFetcher::new(client)), 1024)?;
//! # Ok(())
//! # }
//! ```

pub mod cache_layer;
pub mod conversions;
pub mod kube_fetcher;

pub use cache_layer::OwnerReferenceCache;
pub use conversions::{cluster_object_from_dynamic, object_ref_from_k8s, owner_ref_from_k8s};
pub use kube_fetcher::{map_kube_error, KubeObjectFetcher};
