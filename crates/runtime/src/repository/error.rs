//! Error types raised by repository implementations.

use stack_core::{ErrorSeverity, StackError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("config repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("failed to load {path}: {reason}")]
    Load { path: String, reason: String },
}

impl StackError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io(_) => ErrorSeverity::Recoverable,
            Self::Load { .. } => ErrorSeverity::Validation,
            Self::Serialization(_) => ErrorSeverity::Internal,
            Self::LockPoisoned => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPOSITORY_LOCK_POISONED",
            Self::Io(_) => "REPOSITORY_IO",
            Self::Serialization(_) => "REPOSITORY_SERIALIZATION",
            Self::Load { .. } => "REPOSITORY_LOAD",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
