use k8s_openapi::api::core::v1::ObjectReference;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::api::DynamicObject;
use kube::ResourceExt;
use kube_owners_application::ports::ClusterObject;
use kube_owners_domain::{DomainError, ObjectRef, ObjectUid, OwnerRef};

/// Converts a core/v1 `ObjectReference`, e.g. an event's `involvedObject`.
///
/// `apiVersion`, `kind` and `name` are required. A missing uid yields a
/// reference that the owner cache will not key.
pub fn object_ref_from_k8s(reference: &ObjectReference) -> Result<ObjectRef, DomainError> {
    let required = |field: &Option<String>, name: &str| -> Result<String, DomainError> {
        field
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| DomainError::InvalidReference(format!("missing {name}")))
    };

    let api_version = required(&reference.api_version, "apiVersion")?;
    let kind = required(&reference.kind, "kind")?;
    let name = required(&reference.name, "name")?;

    Ok(ObjectRef::new(
        api_version,
        kind,
        reference.namespace.as_deref(),
        name,
        reference.uid.as_deref().unwrap_or_default(),
    ))
}

pub fn owner_ref_from_k8s(owner: &OwnerReference) -> OwnerRef {
    OwnerRef {
        controller: owner.controller,
        block_owner_deletion: owner.block_owner_deletion,
        ..OwnerRef::new(&owner.api_version, &owner.kind, &owner.name, owner.uid.as_str())
    }
}

/// Extracts the uid and declared owners of a fetched object, in order.
pub fn cluster_object_from_dynamic(object: &DynamicObject) -> ClusterObject {
    ClusterObject::new(
        object.uid().map(ObjectUid::from),
        object
            .owner_references()
            .iter()
            .map(owner_ref_from_k8s)
            .collect(),
    )
}
