pub mod resolve_owner_chain;

pub use resolve_owner_chain::ResolveOwnerChainUseCase;
