use crate::dice;
use crate::dice::signed;
use crate::dice::Critic;
use crate::dice::RollSpec;
use crate::format;
use std::collections::HashSet;
use std::ops::Deref;

/// Outcome of evaluating one [`RollSpec`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    spec: RollSpec,
    /// Every die in throw order
    rolls: Vec<dice::Result>,
    /// Parallel to `rolls`
    kept: Vec<bool>,
    sum_kept: i64,
    total: i64,
}

impl RollResult {
    pub(crate) fn new(spec: RollSpec, rolls: Vec<dice::Result>, kept: Vec<bool>) -> Self {
        let sum_kept = rolls
            .iter()
            .zip(kept.iter())
            .filter(|(_, k)| **k)
            .fold(0i64, |acc, (r, _)| acc.saturating_add(signed(r.value)));
        let total = sum_kept
            .saturating_add(spec.modifier())
            .saturating_mul(signed(spec.multiplier()));
        RollResult {
            spec,
            rolls,
            kept,
            sum_kept,
            total,
        }
    }

    pub fn spec(&self) -> &RollSpec {
        &self.spec
    }

    pub fn rolls(&self) -> &[dice::Result] {
        &self.rolls
    }

    /// Dice counted in the sum, in throw order
    pub fn kept(&self) -> impl Iterator<Item = &dice::Result> + '_ {
        self.rolls
            .iter()
            .zip(self.kept.iter())
            .filter_map(|(r, &k)| k.then_some(r))
    }

    pub fn is_kept(&self, index: usize) -> bool {
        self.kept.get(index).copied().unwrap_or(false)
    }

    pub fn get_sum_kept(&self) -> i64 {
        self.sum_kept
    }

    pub fn get_total(&self) -> i64 {
        self.total
    }

    /// Critic markers among every thrown die
    pub fn critics(&self) -> HashSet<Critic> {
        self.rolls
            .iter()
            .map(|r| r.critic)
            .filter(|c| *c != Critic::Not)
            .collect()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format::format(self, &self.spec))
    }
}

/// Repeated evaluations of the same [`RollSpec`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    rolls: Vec<RollResult>,
    sum: i64,
    min: i64,
    max: i64,
}

impl BatchSummary {
    /// `rolls` is never empty, batches of zero are rejected upfront
    pub(crate) fn new(rolls: Vec<RollResult>) -> Self {
        let (sum, min, max) = rolls.iter().map(|r| r.get_total()).fold(
            (0i64, i64::MAX, i64::MIN),
            |(sum, min, max), total| (sum.saturating_add(total), min.min(total), max.max(total)),
        );
        BatchSummary {
            rolls,
            sum,
            min,
            max,
        }
    }

    pub fn sum(&self) -> i64 {
        self.sum
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn average(&self) -> f64 {
        if self.rolls.is_empty() {
            0.0
        } else {
            self.sum as f64 / self.rolls.len() as f64
        }
    }
}

impl Deref for BatchSummary {
    type Target = Vec<RollResult>;

    fn deref(&self) -> &Self::Target {
        &self.rolls
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format::format_batch(self))
    }
}
