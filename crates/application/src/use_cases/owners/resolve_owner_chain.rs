use kube_owners_domain::{controller_of, DomainError, ObjectRef, ObjectUid, OwnerRef};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::OwnerReferenceProvider;

/// Walks the ownership graph upward from an object to its root owner.
///
/// At each hop the controller owner is followed, or the first declared
/// owner when none is flagged. The walk ends at an object with no owners
/// (including owners that no longer exist), or when an owner revisits a
/// uid already on the chain.
pub struct ResolveOwnerChainUseCase {
    owners: Arc<dyn OwnerReferenceProvider>,
    max_depth: usize,
}

impl ResolveOwnerChainUseCase {
    pub fn new(owners: Arc<dyn OwnerReferenceProvider>, max_depth: usize) -> Self {
        Self { owners, max_depth }
    }

    /// Returns the chain nearest owner first; the last element is the root.
    #[instrument(skip(self), fields(object = %reference))]
    pub async fn execute(&self, reference: &ObjectRef) -> Result<Vec<OwnerRef>, DomainError> {
        let mut chain = Vec::new();
        let mut visited: HashSet<ObjectUid> = HashSet::new();
        visited.insert(reference.uid.clone());

        let namespace = reference.namespace.clone();
        let mut current = reference.clone();

        loop {
            let declared = self.owners.get_owner_references(&current).await?;
            let Some(next) = controller_of(&declared).or_else(|| declared.first()) else {
                break;
            };

            if !visited.insert(next.uid.clone()) {
                debug!(uid = %next.uid, kind = %next.kind, "Owner cycle detected, stopping");
                break;
            }

            if chain.len() == self.max_depth {
                return Err(DomainError::OwnerChainTooDeep(self.max_depth));
            }

            current = next.to_object_ref(namespace.as_deref());
            chain.push(next.clone());
        }

        debug!(depth = chain.len(), "Owner chain resolved");
        Ok(chain)
    }
}
