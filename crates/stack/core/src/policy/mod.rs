//! Pure stack-policy rules: effective limits and entity classification.
mod classify;
mod limit;

pub use classify::{is_excluded, is_multiplier_eligible};
pub use limit::{LimitOverride, effective_limit, limit_override};
