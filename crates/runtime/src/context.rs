//! The explicit context object the hook entry points run against.
//!
//! [`StackContext`] owns everything the policy remembers between events: the
//! multiplier store and its pending write, the multiplier cache, backpack and
//! fast-transfer caches, the host oracles, and the config repository. It is
//! built once at startup and dropped at shutdown; nothing is global.

use std::sync::Arc;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use stack_core::{PrefabId, PrefabOracle, StackConfig};
use tracing::{debug, info, warn};

use crate::cache::{BackpackRegistry, MultiplierCache, ShiftIntentCache};
use crate::error::{Result, RuntimeError};
use crate::oracle::OracleManager;
use crate::repository::{ConfigRepository, InMemoryConfigRepo, RepositoryError};
use crate::store::{MultiplierStore, ValidationReport};

/// Prefab ids resolved once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefabIds {
    /// Player body prefab; `None` when the host does not register it.
    pub player: Option<PrefabId>,
    /// Synthetic id the backpack multiplier is cached under.
    pub backpack: PrefabId,
}

impl PrefabIds {
    pub fn resolve(prefabs: &dyn PrefabOracle) -> Self {
        Self {
            player: prefabs.id_of(StackConfig::PLAYER_PREFAB),
            backpack: probe_unused(prefabs),
        }
    }
}

/// First id at or above `closest()` that the host has not registered.
fn probe_unused(prefabs: &dyn PrefabOracle) -> PrefabId {
    let start = prefabs.closest().0;
    (start..=u32::MAX)
        .map(PrefabId)
        .find(|id| !prefabs.is_registered(*id))
        .unwrap_or(PrefabId(start))
}

/// Stack policy state for one host process.
pub struct StackContext {
    pub(crate) store: MultiplierStore,
    pub(crate) multipliers: MultiplierCache,
    pub(crate) backpacks: BackpackRegistry,
    pub(crate) shift: ShiftIntentCache,
    pub(crate) oracles: OracleManager,
    pub(crate) ids: PrefabIds,
    pub(crate) rng: StdRng,
    repository: Arc<dyn ConfigRepository>,
    report: ValidationReport,
}

impl StackContext {
    /// Create a new context builder
    pub fn builder() -> StackContextBuilder {
        StackContextBuilder::new()
    }

    pub fn config(&self) -> &StackConfig {
        self.store.config()
    }

    pub fn store(&self) -> &MultiplierStore {
        &self.store
    }

    pub fn prefab_ids(&self) -> PrefabIds {
        self.ids
    }

    pub fn multipliers(&self) -> &MultiplierCache {
        &self.multipliers
    }

    pub fn backpacks(&self) -> &BackpackRegistry {
        &self.backpacks
    }

    pub fn shift_cache(&self) -> &ShiftIntentCache {
        &self.shift
    }

    /// What startup validation changed in the loaded configuration.
    pub fn validation_report(&self) -> &ValidationReport {
        &self.report
    }

    /// Returns true while configuration changes wait to be written.
    pub fn is_dirty(&self) -> bool {
        self.store.schedule().is_dirty()
    }

    /// Sets the multiplier for a container-type key and refreshes the cache.
    ///
    /// Non-positive values are stored as the default multiplier.
    pub fn set_multiplier(&mut self, key: &str, multiplier: f32) -> f32 {
        let value = self.store.set(key, multiplier);
        let prefab = if key == StackConfig::BACKPACK_KEY {
            Some(self.ids.backpack)
        } else {
            self.oracles.prefabs().id_of(key)
        };
        if let Some(prefab) = prefab {
            self.multipliers.insert(prefab, value);
        }
        value
    }

    /// Advances the debounced write; the host calls this from its loop.
    pub fn tick(&mut self, now: Instant) {
        if self.store.schedule_mut().poll(now) {
            self.persist();
        }
    }

    /// Writes pending changes immediately, if any.
    pub fn shutdown(&mut self) {
        if self.is_dirty() {
            self.persist();
        }
    }

    /// Writes the configuration now, regardless of the schedule.
    pub fn flush(&mut self) -> std::result::Result<(), RepositoryError> {
        self.repository.save(self.store.config())?;
        self.store.schedule_mut().complete();
        Ok(())
    }

    fn persist(&mut self) {
        match self.flush() {
            Ok(()) => debug!(
                target: "stack::persistence",
                containers = self.store.len(),
                "Config written"
            ),
            Err(error) => {
                warn!(
                    target: "stack::persistence",
                    error = %error,
                    "Config write failed, retrying"
                );
                self.store.schedule_mut().retry();
            }
        }
    }
}

/// Builder for [`StackContext`].
pub struct StackContextBuilder {
    config: Option<StackConfig>,
    oracles: Option<OracleManager>,
    repository: Option<Arc<dyn ConfigRepository>>,
    seed: Option<u64>,
}

impl StackContextBuilder {
    fn new() -> Self {
        Self {
            config: None,
            oracles: None,
            repository: None,
            seed: None,
        }
    }

    /// Use this configuration instead of loading one from the repository.
    pub fn config(mut self, config: StackConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Where configuration is loaded from and written to.
    ///
    /// Defaults to an empty [`InMemoryConfigRepo`].
    pub fn repository(mut self, repository: Arc<dyn ConfigRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Seeds the drop-scatter generator for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Loads, validates and caches the configuration.
    pub fn build(self) -> Result<StackContext> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let repository = self
            .repository
            .unwrap_or_else(|| Arc::new(InMemoryConfigRepo::new()));

        let (config, loaded) = match self.config {
            Some(config) => (config, true),
            None => match repository.load()? {
                Some(config) => (config, true),
                None => {
                    warn!(target: "stack::persistence", "Loading default config");
                    (StackConfig::default(), false)
                }
            },
        };

        let mut store = MultiplierStore::new(config);
        if !loaded {
            store.schedule_mut().schedule();
        }

        let report = store.validate(oracles.prefabs());
        let ids = PrefabIds::resolve(oracles.prefabs());
        let multipliers =
            MultiplierCache::from_config(store.config(), oracles.prefabs(), ids.backpack);

        info!(
            target: "stack::store",
            containers = store.len(),
            cached = multipliers.len(),
            backpack_id = %ids.backpack,
            "Stack multipliers loaded"
        );

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(StackContext {
            store,
            multipliers,
            backpacks: BackpackRegistry::new(),
            shift: ShiftIntentCache::new(),
            oracles,
            ids,
            rng,
            repository,
            report,
        })
    }
}
