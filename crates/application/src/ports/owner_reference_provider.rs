use async_trait::async_trait;
use kube_owners_domain::{DomainError, ObjectRef, OwnerRef};
use std::sync::Arc;

#[async_trait]
pub trait OwnerReferenceProvider: Send + Sync {
    /// Owners declared by `reference`. An object that no longer exists
    /// reports no owners rather than an error.
    async fn get_owner_references(
        &self,
        reference: &ObjectRef,
    ) -> Result<Arc<[OwnerRef]>, DomainError>;
}
