//! Runtime for the container stack-size policy.
//!
//! This crate layers state, logging and persistence over the pure rules in
//! `stack-core`. Hosts build one [`StackContext`] at startup, invoke its
//! [`StackHooks`] entry points from their event dispatch, and call
//! [`StackContext::tick`] so batched configuration writes can happen.
//!
//! Modules are organized by responsibility:
//! - [`context`] hosts the context object and its builder
//! - [`hooks`] holds the entry points and the move/drop orchestration
//! - [`store`] and [`cache`] hold the multiplier set and runtime caches
//! - [`persistence`] implements the debounced write schedule
//! - [`oracle`] and [`repository`] provide host and storage adapters
pub mod cache;
pub mod context;
pub mod error;
pub mod hooks;
pub mod oracle;
pub mod persistence;
pub mod repository;
pub mod store;

pub use cache::{BackpackRegistry, MultiplierCache, ShiftIntentCache};
pub use context::{PrefabIds, StackContext, StackContextBuilder};
pub use error::{Result, RuntimeError};
pub use hooks::{MoveRequest, MoveVerdict, StackHooks};
pub use oracle::{OracleManager, PermissionOracleImpl};
pub use persistence::WriteSchedule;
pub use repository::{
    ConfigRepository, FileConfigRepository, InMemoryConfigRepo, RepositoryError,
};
pub use store::{MultiplierStore, ValidationReport};
