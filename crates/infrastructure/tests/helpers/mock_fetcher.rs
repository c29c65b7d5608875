#![allow(dead_code)]

use async_trait::async_trait;
use kube_owners_application::ports::{ClusterObject, ObjectFetcher};
use kube_owners_domain::{DomainError, ObjectRef, ObjectUid, OwnerRef};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone)]
enum Response {
    Found(ClusterObject),
    Fail(DomainError),
}

// ============================================================================
// Mock ObjectFetcher
// ============================================================================

/// Fetcher answering from a fixed table keyed by object name.
///
/// Unknown names resolve to `NotFound`. Every call is counted.
#[derive(Clone, Default)]
pub struct MockObjectFetcher {
    responses: Arc<RwLock<HashMap<String, Response>>>,
    calls: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl MockObjectFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetch sleeps for `delay` before answering.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub async fn set_object(&self, name: &str, uid: &str, owners: Vec<OwnerRef>) {
        self.responses.write().await.insert(
            name.to_string(),
            Response::Found(ClusterObject::new(Some(ObjectUid::from(uid)), owners)),
        );
    }

    pub async fn set_failure(&self, name: &str, error: DomainError) {
        self.responses
            .write()
            .await
            .insert(name.to_string(), Response::Fail(error));
    }

    pub async fn clear(&self, name: &str) {
        self.responses.write().await.remove(name);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectFetcher for MockObjectFetcher {
    async fn fetch(&self, reference: &ObjectRef) -> Result<ClusterObject, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.responses.read().await.get(&*reference.name) {
            Some(Response::Found(object)) => Ok(object.clone()),
            Some(Response::Fail(error)) => Err(error.clone()),
            None => Err(DomainError::NotFound(format!("{reference} not found"))),
        }
    }
}

pub fn reference(name: &str, uid: &str) -> ObjectRef {
    ObjectRef::new("apps/v1", "ReplicaSet", Some("default"), name, uid)
}
