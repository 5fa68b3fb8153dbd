//! Read-only host services consumed by the stack runtime.
//!
//! Prefab resolution and permission grants are owned by the host; the runtime
//! only queries them. [`OracleManager`] bundles both behind shared pointers so
//! the context and tools can hold them without caring about the concrete type.
mod permissions;

use std::sync::Arc;

use stack_core::{PermissionOracle, PrefabOracle};

pub use permissions::PermissionOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) prefabs: Arc<dyn PrefabOracle>,
    pub(crate) permissions: Arc<dyn PermissionOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(prefabs: Arc<dyn PrefabOracle>, permissions: Arc<dyn PermissionOracle>) -> Self {
        Self {
            prefabs,
            permissions,
        }
    }

    pub fn prefabs(&self) -> &dyn PrefabOracle {
        self.prefabs.as_ref()
    }

    pub fn permissions(&self) -> &dyn PermissionOracle {
        self.permissions.as_ref()
    }
}
