//! Configuration module for Kube Owners
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and TOML parsing
//! - `owner_cache`: Owner reference cache sizing and chain traversal limits
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod owner_cache;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use owner_cache::OwnerCacheConfig;
pub use root::Config;
