//! Repository contract for the persisted multiplier configuration.

use stack_core::StackConfig;

use crate::repository::Result;

/// Storage for the single [`StackConfig`] document.
///
/// The runtime loads it once at startup and writes it back whenever the
/// multiplier set changed.
pub trait ConfigRepository: Send + Sync {
    /// Load the stored configuration, `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<StackConfig>>;

    /// Replace the stored configuration.
    fn save(&self, config: &StackConfig) -> Result<()>;

    /// Check if a configuration has been stored
    fn exists(&self) -> bool;
}
