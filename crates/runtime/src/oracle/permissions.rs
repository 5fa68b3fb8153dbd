//! Permission oracle implementation for runtime.

use std::collections::{HashMap, HashSet};

use stack_core::{ActorId, PermissionOracle};

/// Static grant table, filled when the context is assembled.
#[derive(Clone, Debug, Default)]
pub struct PermissionOracleImpl {
    grants: HashMap<ActorId, HashSet<String>>,
}

impl PermissionOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&mut self, actor: ActorId, permission: impl Into<String>) {
        self.grants
            .entry(actor)
            .or_default()
            .insert(permission.into());
    }

    pub fn with_grant(mut self, actor: ActorId, permission: impl Into<String>) -> Self {
        self.grant(actor, permission);
        self
    }
}

impl PermissionOracle for PermissionOracleImpl {
    fn has_permission(&self, actor: ActorId, permission: &str) -> bool {
        self.grants
            .get(&actor)
            .is_some_and(|granted| granted.contains(permission))
    }
}
