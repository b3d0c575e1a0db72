use serde::Deserialize;

/// Anti-abuse bounds supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Most dice a single expression may throw
    pub max_dice_count: u64,
    /// Most faces a die may have
    pub max_dice_sides: u64,
    /// Most evaluations a repeated roll may request
    pub max_batch_count: u64,
    /// Largest absolute value of the summed modifier
    pub max_modifier: u64,
    /// Largest multiplier suffix
    pub max_multiplier: u64,
}

impl Limits {
    pub const DEFAULT_MAX_DICE_COUNT: u64 = 100;
    pub const DEFAULT_MAX_DICE_SIDES: u64 = 1000;
    pub const DEFAULT_MAX_BATCH_COUNT: u64 = 100;
    pub const DEFAULT_MAX_MODIFIER: u64 = 100_000;
    pub const DEFAULT_MAX_MULTIPLIER: u64 = 1000;
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_dice_count: Self::DEFAULT_MAX_DICE_COUNT,
            max_dice_sides: Self::DEFAULT_MAX_DICE_SIDES,
            max_batch_count: Self::DEFAULT_MAX_BATCH_COUNT,
            max_modifier: Self::DEFAULT_MAX_MODIFIER,
            max_multiplier: Self::DEFAULT_MAX_MULTIPLIER,
        }
    }
}
