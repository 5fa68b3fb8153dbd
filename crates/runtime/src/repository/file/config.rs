//! File-based ConfigRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use stack_core::StackConfig;

use crate::repository::{ConfigRepository, RepositoryError, Result};

/// Stores the configuration as one pretty-printed JSON document.
///
/// Writes go to a sibling temp file first and are renamed over the target,
/// so a crash mid-write never leaves a truncated config behind.
pub struct FileConfigRepository {
    path: PathBuf,
}

impl FileConfigRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigRepository for FileConfigRepository {
    fn load(&self) -> Result<Option<StackConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        let config: StackConfig =
            serde_json::from_str(&content).map_err(|e| RepositoryError::Load {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            target: "stack::persistence",
            path = %self.path.display(),
            containers = config.container_multipliers.len(),
            "Loaded config"
        );

        Ok(Some(config))
    }

    fn save(&self, config: &StackConfig) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            target: "stack::persistence",
            path = %self.path.display(),
            "Saved config"
        );

        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
