//! Errors surfaced while assembling a [`crate::StackContext`].
//!
//! Hook entry points never fail; they fall back to native behavior instead.
//! Only construction and explicit persistence calls return these.

use stack_core::{ErrorSeverity, StackError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("stack context requires oracles to be configured before building")]
    MissingOracles,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl StackError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingOracles => ErrorSeverity::Validation,
            Self::Repository(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingOracles => "RUNTIME_MISSING_ORACLES",
            Self::Repository(error) => error.error_code(),
        }
    }
}
