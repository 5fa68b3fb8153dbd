use crate::state::ActorId;

/// Permission-system lookups.
pub trait PermissionOracle: Send + Sync {
    fn has_permission(&self, actor: ActorId, permission: &str) -> bool;
}
