use super::conversions::cluster_object_from_dynamic;
use async_trait::async_trait;
use dashmap::DashMap;
use kube::api::{Api, DynamicObject};
use kube::core::GroupVersionKind;
use kube::discovery::{self, ApiCapabilities, ApiResource, Scope};
use kube::Client;
use kube_owners_application::ports::{ClusterObject, ObjectFetcher};
use kube_owners_domain::{DomainError, ObjectRef};
use std::sync::Arc;
use tracing::debug;

type KindKey = (Arc<str>, Arc<str>);

/// Maps a kube client error onto the domain taxonomy.
///
/// Only an API 404 means "not found"; every other failure (transport,
/// auth, discovery) is a lookup failure.
pub fn map_kube_error(error: kube::Error) -> DomainError {
    match error {
        kube::Error::Api(response) if response.code == 404 => {
            DomainError::NotFound(response.message)
        }
        other => DomainError::LookupFailed(other.to_string()),
    }
}

/// Fetches arbitrary kinds through the dynamic API.
///
/// apiVersion+kind pairs are resolved once through discovery and the
/// resulting resource (plural, scope) is reused for later fetches of the
/// same kind. Objects themselves are never cached here.
pub struct KubeObjectFetcher {
    client: Client,
    kinds: DashMap<KindKey, (ApiResource, ApiCapabilities)>,
}

impl KubeObjectFetcher {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            kinds: DashMap::new(),
        }
    }

    /// Client from the local kubeconfig or in-cluster service account.
    pub async fn try_default() -> Result<Self, DomainError> {
        let client = Client::try_default().await.map_err(map_kube_error)?;
        Ok(Self::new(client))
    }

    async fn resolve_kind(
        &self,
        reference: &ObjectRef,
    ) -> Result<(ApiResource, ApiCapabilities), DomainError> {
        let key = (
            Arc::clone(&reference.api_version),
            Arc::clone(&reference.kind),
        );
        if let Some(entry) = self.kinds.get(&key) {
            return Ok(entry.value().clone());
        }

        let (group, version) = reference.group_version();
        let gvk = GroupVersionKind::gvk(group, version, &reference.kind);
        let resolved = discovery::pinned_kind(&self.client, &gvk)
            .await
            .map_err(map_kube_error)?;

        debug!(
            api_version = %reference.api_version,
            kind = %reference.kind,
            plural = %resolved.0.plural,
            "Resolved kind through discovery"
        );
        self.kinds.insert(key, resolved.clone());
        Ok(resolved)
    }

    fn validate(reference: &ObjectRef) -> Result<(), DomainError> {
        if reference.api_version.is_empty() {
            return Err(DomainError::InvalidReference("missing apiVersion".to_string()));
        }
        if reference.kind.is_empty() {
            return Err(DomainError::InvalidReference("missing kind".to_string()));
        }
        if reference.name.is_empty() {
            return Err(DomainError::InvalidReference("missing name".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectFetcher for KubeObjectFetcher {
    async fn fetch(&self, reference: &ObjectRef) -> Result<ClusterObject, DomainError> {
        Self::validate(reference)?;
        let (resource, capabilities) = self.resolve_kind(reference).await?;

        let api: Api<DynamicObject> = match (&capabilities.scope, reference.namespace.as_deref()) {
            (Scope::Namespaced, Some(namespace)) => {
                Api::namespaced_with(self.client.clone(), namespace, &resource)
            }
            (Scope::Namespaced, None) => {
                return Err(DomainError::InvalidReference(format!(
                    "{} is namespaced but the reference has no namespace",
                    reference.kind
                )));
            }
            (Scope::Cluster, _) => Api::all_with(self.client.clone(), &resource),
        };

        let object = api.get(&reference.name).await.map_err(map_kube_error)?;
        Ok(cluster_object_from_dynamic(&object))
    }
}
