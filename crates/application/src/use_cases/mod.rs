pub mod owners;

pub use owners::ResolveOwnerChainUseCase;
