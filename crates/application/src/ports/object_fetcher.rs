use async_trait::async_trait;
use kube_owners_domain::{DomainError, ObjectRef, ObjectUid, OwnerRef};

/// The slice of a fetched cluster object the owner lookup needs.
#[derive(Debug, Clone, Default)]
pub struct ClusterObject {
    /// Uid reported by the cluster, if present in the response.
    pub uid: Option<ObjectUid>,
    /// Owners in the order the object's metadata declares them.
    pub owner_references: Vec<OwnerRef>,
}

impl ClusterObject {
    pub fn new(uid: Option<ObjectUid>, owner_references: Vec<OwnerRef>) -> Self {
        Self {
            uid,
            owner_references,
        }
    }

    pub fn owner_references(&self) -> &[OwnerRef] {
        &self.owner_references
    }
}

/// Remote lookup of a single object by apiVersion/kind/namespace/name.
///
/// Implementations must return `DomainError::NotFound` when the cluster
/// reports the object does not exist and any other variant for every
/// other failure. No caching and no retries.
#[async_trait]
pub trait ObjectFetcher: Send + Sync {
    async fn fetch(&self, reference: &ObjectRef) -> Result<ClusterObject, DomainError>;
}
