//! Split/merge primitives.
//!
//! Every primitive either completes or restores the stacks it touched, so the
//! total amount of an item type is conserved across success and failure.
mod drop;
mod error;
mod primitives;

pub use drop::{DropPlan, plan_drop};
pub use error::TransferError;
pub use primitives::{Destination, merge_back, place, split_move, swap};
