use crate::config::StackConfig;

/// Result of a max-stack query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitOverride {
    /// Keep the engine-native limit.
    Native,
    Override(u32),
}

impl LimitOverride {
    pub fn value(self) -> Option<u32> {
        match self {
            Self::Native => None,
            Self::Override(limit) => Some(limit),
        }
    }

    /// Limit in effect for a stack with native limit `base`.
    pub fn resolve(self, base: u32) -> u32 {
        self.value().unwrap_or(base)
    }
}

/// `floor(multiplier * base)`, never below one.
///
/// The product is taken in single precision, so `2.3 * 100` is 230 rather
/// than the 229 a widened product floors to.
///
/// Non-finite or non-positive multipliers fall back to the native limit.
pub fn effective_limit(multiplier: f32, base: u32) -> u32 {
    let base = base.max(1);
    if !StackConfig::is_valid_multiplier(multiplier) {
        return base;
    }
    let scaled = (multiplier * base as f32).floor();
    if scaled >= u32::MAX as f32 {
        u32::MAX
    } else {
        (scaled as u32).max(1)
    }
}

/// Override signal for a resolved multiplier.
///
/// A multiplier of exactly 1.0 reports [`LimitOverride::Native`] so that
/// unrelated systems keep their native behavior.
pub fn limit_override(multiplier: f32, base: u32) -> LimitOverride {
    if multiplier == StackConfig::DEFAULT_MULTIPLIER {
        return LimitOverride::Native;
    }
    LimitOverride::Override(effective_limit(multiplier, base))
}
