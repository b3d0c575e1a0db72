use crate::error;
use crate::error::Error;
use crate::error::Field;
use crate::limits::Limits;
use std::ops::Deref;

/// Mark if a dice result is a critic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Critic {
    Max,
    Min,
    Not,
}

/// Keep one dice result with critic marker
#[derive(Debug, Clone, Copy)]
pub struct Result {
    pub value: u64,
    pub critic: Critic,
}

impl Result {
    pub fn new(value: u64, sides: u64) -> Self {
        Result {
            value,
            critic: match value {
                v if v == sides => Critic::Max,
                1 => Critic::Min,
                _ => Critic::Not,
            },
        }
    }
}

impl PartialEq for Result {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Result {}

impl PartialOrd for Result {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Result {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl Deref for Result {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

fn cap(limit: u64) -> u64 {
    limit.min(i64::MAX as u64)
}

/// Validated fields never exceed `i64::MAX`
pub(crate) fn signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Which dice count towards the sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeepPolicy {
    #[default]
    KeepAll,
    KeepHighest(u64),
    KeepLowest(u64),
}

impl KeepPolicy {
    /// Amount of dice kept out of `count`
    pub fn amount(&self, count: u64) -> u64 {
        match *self {
            KeepPolicy::KeepAll => count,
            KeepPolicy::KeepHighest(n) | KeepPolicy::KeepLowest(n) => n,
        }
    }
}

impl std::fmt::Display for KeepPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeepPolicy::KeepAll => Ok(()),
            KeepPolicy::KeepHighest(n) => write!(f, "k{n}"),
            KeepPolicy::KeepLowest(n) => write!(f, "l{n}"),
        }
    }
}

/// Immutable description of a single dice expression
///
/// A spec with `count == 0` is a constant roll: no die is thrown and the total
/// is the modifier alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollSpec {
    count: u64,
    sides: u64,
    modifier: i64,
    multiplier: u64,
    keep: KeepPolicy,
}

impl RollSpec {
    /// New dice roll, checked against `limits`
    pub fn new(
        count: u64,
        sides: u64,
        modifier: i64,
        multiplier: u64,
        keep: KeepPolicy,
        limits: &Limits,
    ) -> error::Result<Self> {
        let spec = RollSpec {
            count,
            sides,
            modifier,
            multiplier,
            keep,
        };
        spec.validate(limits)?;
        Ok(spec)
    }

    /// New constant roll
    pub fn constant(value: i64, limits: &Limits) -> error::Result<Self> {
        let spec = RollSpec {
            count: 0,
            sides: 0,
            modifier: value,
            multiplier: 1,
            keep: KeepPolicy::KeepAll,
        };
        spec.validate(limits)?;
        Ok(spec)
    }

    /// Check every bounded field, in declaration order
    ///
    /// Limits above `i64::MAX` are capped there, totals are signed.
    pub fn validate(&self, limits: &Limits) -> error::Result<()> {
        let max_dice_count = cap(limits.max_dice_count);
        let max_dice_sides = cap(limits.max_dice_sides);
        let max_multiplier = cap(limits.max_multiplier);
        if !self.is_constant() {
            if self.count > max_dice_count {
                return Err(Error::range(Field::Count, self.count, max_dice_count));
            }
            if self.sides == 0 || self.sides > max_dice_sides {
                return Err(Error::range(Field::Sides, self.sides, max_dice_sides));
            }
            match self.keep {
                KeepPolicy::KeepAll => (),
                KeepPolicy::KeepHighest(n) | KeepPolicy::KeepLowest(n) => {
                    if n == 0 || n > self.count {
                        return Err(Error::range(Field::Keep, n, self.count));
                    }
                }
            }
        } else if self.sides != 0 || self.keep != KeepPolicy::KeepAll {
            return Err(Error::range(Field::Count, 0, max_dice_count));
        } else if self.multiplier != 1 {
            // a constant has no dice chain to scale
            return Err(Error::range(Field::Multiplier, self.multiplier, 1));
        }
        if self.modifier.unsigned_abs() > limits.max_modifier {
            return Err(Error::range(
                Field::Modifier,
                self.modifier.unsigned_abs(),
                limits.max_modifier,
            ));
        }
        if self.multiplier == 0 || self.multiplier > max_multiplier {
            return Err(Error::range(
                Field::Multiplier,
                self.multiplier,
                max_multiplier,
            ));
        }
        Ok(())
    }

    pub fn is_constant(&self) -> bool {
        self.count == 0
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sides(&self) -> u64 {
        self.sides
    }

    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    pub fn keep(&self) -> KeepPolicy {
        self.keep
    }

    /// Smallest and largest total this spec can produce
    pub fn bounds(&self) -> (i64, i64) {
        let kept = signed(self.keep.amount(self.count));
        let multiplier = signed(self.multiplier);
        let low = kept.saturating_add(self.modifier).saturating_mul(multiplier);
        let high = kept
            .saturating_mul(signed(self.sides))
            .saturating_add(self.modifier)
            .saturating_mul(multiplier);
        (low, high)
    }
}

impl std::fmt::Display for RollSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_constant() {
            return write!(f, "{}", self.modifier);
        }
        let chain = match self.modifier {
            0 => format!("{}d{}{}", self.count, self.sides, self.keep),
            m => format!("{}d{}{}{:+}", self.count, self.sides, self.keep, m),
        };
        match self.multiplier {
            1 => write!(f, "{chain}"),
            m if self.modifier == 0 => write!(f, "{chain}x{m}"),
            m => write!(f, "({chain})x{m}"),
        }
    }
}
