use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Object lookup failed: {0}")]
    LookupFailed(String),

    #[error("Invalid object reference: {0}")]
    InvalidReference(String),

    #[error("Invalid cache capacity: {0}")]
    InvalidCacheCapacity(usize),

    #[error("No object fetcher configured")]
    FetcherUnavailable,

    #[error("Owner chain exceeds maximum depth of {0}")]
    OwnerChainTooDeep(usize),
}

impl DomainError {
    /// True when the cluster reported that the object does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}
