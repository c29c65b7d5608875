use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Cluster-assigned unique identifier of an object instance.
///
/// Stable for the lifetime of the object and never reused, which makes it
/// the cache key for owner lookups. Clones share the same allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectUid(Arc<str>);

impl ObjectUid {
    pub fn new(uid: impl AsRef<str>) -> Self {
        Self(Arc::from(uid.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ObjectUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectUid {
    fn from(uid: &str) -> Self {
        Self::new(uid)
    }
}

impl From<String> for ObjectUid {
    fn from(uid: String) -> Self {
        Self(Arc::from(uid))
    }
}

impl AsRef<str> for ObjectUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lightweight handle to a cluster object.
///
/// Carries enough to address the object (`api_version`, `kind`,
/// `namespace`, `name`) plus the `uid` used as cache key. It does not
/// carry ownership data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRef {
    pub api_version: Arc<str>,
    pub kind: Arc<str>,
    #[serde(default)]
    pub namespace: Option<Arc<str>>,
    pub name: Arc<str>,
    pub uid: ObjectUid,
}

impl ObjectRef {
    pub fn new(
        api_version: impl AsRef<str>,
        kind: impl AsRef<str>,
        namespace: Option<&str>,
        name: impl AsRef<str>,
        uid: impl Into<ObjectUid>,
    ) -> Self {
        Self {
            api_version: Arc::from(api_version.as_ref()),
            kind: Arc::from(kind.as_ref()),
            namespace: namespace.filter(|ns| !ns.is_empty()).map(Arc::from),
            name: Arc::from(name.as_ref()),
            uid: uid.into(),
        }
    }

    /// Splits `api_version` into `(group, version)`.
    ///
    /// The core group has no prefix: `"v1"` yields `("", "v1")`.
    pub fn group_version(&self) -> (&str, &str) {
        match self.api_version.split_once('/') {
            Some((group, version)) => (group, version),
            None => ("", &self.api_version),
        }
    }

    /// A reference without a uid cannot be keyed in the owner cache.
    pub fn has_uid(&self) -> bool {
        !self.uid.is_empty()
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}/{}/{}", self.kind, ns, self.name),
            None => write!(f, "{}/{}", self.kind, self.name),
        }
    }
}
