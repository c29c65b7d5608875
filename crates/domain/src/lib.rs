//! Kube Owners Domain Layer
pub mod config;
pub mod errors;
pub mod object_ref;
pub mod owner_ref;

pub use config::{Config, ConfigError, LoggingConfig, OwnerCacheConfig};
pub use errors::DomainError;
pub use object_ref::{ObjectRef, ObjectUid};
pub use owner_ref::{controller_of, OwnerRef};
