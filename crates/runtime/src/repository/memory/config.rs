//! In-memory ConfigRepository implementation for tests and local runs.

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use stack_core::StackConfig;

use crate::repository::{ConfigRepository, RepositoryError, Result};

/// Keeps the last saved configuration in memory and counts saves.
#[derive(Default)]
pub struct InMemoryConfigRepo {
    config: RwLock<Option<StackConfig>>,
    saves: AtomicUsize,
}

impl InMemoryConfigRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an already stored configuration.
    pub fn with_config(config: StackConfig) -> Self {
        Self {
            config: RwLock::new(Some(config)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }

    /// Currently stored configuration.
    pub fn current(&self) -> Option<StackConfig> {
        self.config.read().ok().and_then(|config| config.clone())
    }
}

impl ConfigRepository for InMemoryConfigRepo {
    fn load(&self) -> Result<Option<StackConfig>> {
        let config = self
            .config
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(config.clone())
    }

    fn save(&self, config: &StackConfig) -> Result<()> {
        let mut stored = self
            .config
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = Some(config.clone());
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.config
            .read()
            .map(|config| config.is_some())
            .unwrap_or(false)
    }
}
