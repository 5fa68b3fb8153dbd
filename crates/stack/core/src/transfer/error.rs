use crate::error::{ErrorSeverity, StackError};
use crate::state::ItemId;

/// Errors raised by the transfer primitives.
///
/// Whenever one of these is returned the world holds the same total amount as
/// before the call. Only [`TransferError::RollbackFailed`] can leave a stack
/// outside its original slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("{0} not found")]
    ItemNotFound(ItemId),

    #[error("cannot split {amount} from {item}")]
    SplitRejected { item: ItemId, amount: u32 },

    /// The split part was merged back into the source stack.
    #[error("destination rejected {amount} split from {item}")]
    PlacementRejected { item: ItemId, amount: u32 },

    #[error("cannot swap {first} with {second}")]
    SwapRejected { first: ItemId, second: ItemId },

    /// A rejected swap could not put both stacks back.
    #[error("failed to restore {first} and {second} after a rejected swap")]
    RollbackFailed { first: ItemId, second: ItemId },
}

impl StackError for TransferError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemNotFound(_) | Self::SplitRejected { .. } => ErrorSeverity::Validation,
            Self::PlacementRejected { .. } | Self::SwapRejected { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::RollbackFailed { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemNotFound(_) => "TRANSFER_ITEM_NOT_FOUND",
            Self::SplitRejected { .. } => "TRANSFER_SPLIT_REJECTED",
            Self::PlacementRejected { .. } => "TRANSFER_PLACEMENT_REJECTED",
            Self::SwapRejected { .. } => "TRANSFER_SWAP_REJECTED",
            Self::RollbackFailed { .. } => "TRANSFER_ROLLBACK_FAILED",
        }
    }
}
