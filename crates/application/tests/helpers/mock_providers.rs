#![allow(dead_code)]

use async_trait::async_trait;
use kube_owners_application::ports::OwnerReferenceProvider;
use kube_owners_domain::{DomainError, ObjectRef, OwnerRef};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock OwnerReferenceProvider
// ============================================================================

#[derive(Clone, Default)]
pub struct MockOwnerProvider {
    owners: Arc<RwLock<HashMap<String, Vec<OwnerRef>>>>,
    failures: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockOwnerProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the owners of the object with `uid`.
    pub async fn set_owners(&self, uid: &str, owners: Vec<OwnerRef>) {
        self.owners.write().await.insert(uid.to_string(), owners);
    }

    /// Makes lookups for `uid` fail with `error`.
    pub async fn set_failure(&self, uid: &str, error: DomainError) {
        self.failures.write().await.insert(uid.to_string(), error);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OwnerReferenceProvider for MockOwnerProvider {
    async fn get_owner_references(
        &self,
        reference: &ObjectRef,
    ) -> Result<Arc<[OwnerRef]>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.failures.read().await.get(reference.uid.as_str()) {
            return Err(error.clone());
        }

        Ok(self
            .owners
            .read()
            .await
            .get(reference.uid.as_str())
            .cloned()
            .unwrap_or_default()
            .into())
    }
}
