use serde::{Deserialize, Serialize};

pub const DEFAULT_CAPACITY: usize = 1024;
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 10;

/// Owner reference cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OwnerCacheConfig {
    /// Maximum number of resident entries (default: 1024)
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Maximum number of owner hops followed when walking to the root
    /// owner (default: 10)
    #[serde(default = "default_max_chain_depth")]
    pub max_chain_depth: usize,
}

impl Default for OwnerCacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            max_chain_depth: default_max_chain_depth(),
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_max_chain_depth() -> usize {
    DEFAULT_MAX_CHAIN_DEPTH
}
