//! Kube Owners Infrastructure Layer
pub mod logging;
pub mod owners;
