use crate::config::StackConfig;

/// How an overstack leaving a container is broken up on the ground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPlan {
    /// The stack fits in one slot; nothing to split.
    WithinLimit,
    /// Split off `loops` limit-sized chunks.
    Split { loops: u32 },
    /// Loop count above [`StackConfig::MAX_DROP_LOOPS`]; the stack is dropped
    /// oversized instead of spawning that many objects.
    TooLarge { loops: u32 },
}

pub fn plan_drop(amount: u32, limit: u32) -> DropPlan {
    let limit = limit.max(1);
    if amount <= limit {
        return DropPlan::WithinLimit;
    }
    let loops = amount / limit;
    if loops > StackConfig::MAX_DROP_LOOPS {
        DropPlan::TooLarge { loops }
    } else {
        DropPlan::Split { loops }
    }
}
