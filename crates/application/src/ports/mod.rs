pub mod object_fetcher;
pub mod owner_reference_provider;

pub use object_fetcher::{ClusterObject, ObjectFetcher};
pub use owner_reference_provider::OwnerReferenceProvider;
