//! Common error infrastructure for stack-core.
//!
//! Domain-specific errors (e.g. [`crate::TransferError`]) are defined next to the
//! operations that produce them. This module only holds the shared severity
//! classification and the trait every error enum implements.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the world rejected a step; state was rolled back and the
///   caller may stop or try something else
/// - **Validation**: invalid input (missing item, bad amount), nothing changed
/// - **Internal**: the host world broke its contract
/// - **Fatal**: state can no longer be trusted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a broken host contract.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all stack-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait StackError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Used as a structured logging field by the runtime.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
