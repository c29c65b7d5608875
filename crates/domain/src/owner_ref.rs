use crate::object_ref::{ObjectRef, ObjectUid};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Declared owner of a cluster object, as recorded in its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRef {
    pub api_version: Arc<str>,
    pub kind: Arc<str>,
    pub name: Arc<str>,
    pub uid: ObjectUid,
    #[serde(default)]
    pub controller: Option<bool>,
    #[serde(default)]
    pub block_owner_deletion: Option<bool>,
}

impl OwnerRef {
    pub fn new(
        api_version: impl AsRef<str>,
        kind: impl AsRef<str>,
        name: impl AsRef<str>,
        uid: impl Into<ObjectUid>,
    ) -> Self {
        Self {
            api_version: Arc::from(api_version.as_ref()),
            kind: Arc::from(kind.as_ref()),
            name: Arc::from(name.as_ref()),
            uid: uid.into(),
            controller: None,
            block_owner_deletion: None,
        }
    }

    pub fn with_controller(mut self, controller: bool) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn with_block_owner_deletion(mut self, block: bool) -> Self {
        self.block_owner_deletion = Some(block);
        self
    }

    pub fn is_controller(&self) -> bool {
        self.controller == Some(true)
    }

    /// Builds a reference to the owner itself.
    ///
    /// Owners live in the namespace of their dependent (cluster-scoped
    /// owners simply ignore it), so the child's namespace is carried over.
    pub fn to_object_ref(&self, namespace: Option<&str>) -> ObjectRef {
        ObjectRef {
            api_version: Arc::clone(&self.api_version),
            kind: Arc::clone(&self.kind),
            namespace: namespace.filter(|ns| !ns.is_empty()).map(Arc::from),
            name: Arc::clone(&self.name),
            uid: self.uid.clone(),
        }
    }
}

/// Returns the owner flagged as controller, if any.
pub fn controller_of(owners: &[OwnerRef]) -> Option<&OwnerRef> {
    owners.iter().find(|owner| owner.is_controller())
}
