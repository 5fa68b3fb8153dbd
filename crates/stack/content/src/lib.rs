//! Data-driven inputs for the stack policy.
//!
//! This crate reads the files a host or tool hands to the runtime:
//! - Multiplier configuration (JSON or TOML, chosen by file extension)
//! - Prefab catalogs (RON) describing the host's prefab string pool
//!
//! Loaded content is converted into `stack-core` types and never carries
//! runtime state of its own.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigFormat, ConfigLoader, PrefabCatalog, PrefabEntry, PrefabLoader};
