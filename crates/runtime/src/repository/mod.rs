//! Repository layer for the persisted multiplier configuration.
//!
//! Only the configuration document changes during play and needs saving.
//! Prefab and permission data are read through oracles, not repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileConfigRepository;
pub use memory::InMemoryConfigRepo;
pub use traits::ConfigRepository;
