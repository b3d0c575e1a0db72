use crate::dice;
use crate::dice::KeepPolicy;
use crate::dice::RollSpec;
use crate::error::Error;
use crate::error::Field;
use crate::error::Result;
use crate::limits::Limits;
use crate::roll;
use crate::roll::BatchSummary;
use crate::roll::RollResult;

/// Throw the dice of `spec` once
///
/// Draws exactly `count` values from `source`, a constant spec draws none.
pub fn evaluate<S: roll::Source>(spec: &RollSpec, source: &mut S) -> RollResult {
    let rolls = roll(spec.count(), spec.sides(), source);
    let kept = select(&rolls, spec.keep());
    let result = RollResult::new(*spec, rolls, kept);
    tracing::debug!(%spec, total = result.get_total(), "rolled");
    result
}

/// Evaluate `spec` `n` times with fresh draws each time
///
/// `n` is checked before the first draw.
pub fn evaluate_batch<S: roll::Source>(
    spec: &RollSpec,
    n: u64,
    limits: &Limits,
    source: &mut S,
) -> Result<BatchSummary> {
    if n == 0 || n > limits.max_batch_count {
        return Err(Error::range(Field::Batch, n, limits.max_batch_count));
    }
    let rolls = (0..n).map(|_| evaluate(spec, source)).collect();
    let batch = BatchSummary::new(rolls);
    tracing::debug!(
        %spec,
        n,
        min = batch.min(),
        max = batch.max(),
        average = batch.average(),
        "rolled batch"
    );
    Ok(batch)
}

pub(crate) fn roll<S: roll::Source>(amount: u64, sides: u64, source: &mut S) -> Vec<dice::Result> {
    (0..amount)
        .map(|_| dice::Result::new(source.throw(sides), sides))
        .collect()
}

/// Flag the dice counted by `keep`
///
/// Sorting is stable, so among equal values the earlier throw wins.
fn select(rolls: &[dice::Result], keep: KeepPolicy) -> Vec<bool> {
    let (n, highest) = match keep {
        KeepPolicy::KeepAll => return vec![true; rolls.len()],
        KeepPolicy::KeepHighest(n) => (n as usize, true),
        KeepPolicy::KeepLowest(n) => (n as usize, false),
    };
    let mut order: Vec<usize> = (0..rolls.len()).collect();
    if highest {
        order.sort_by(|&a, &b| rolls[b].cmp(&rolls[a]));
    } else {
        order.sort_by(|&a, &b| rolls[a].cmp(&rolls[b]));
    }
    let mut kept = vec![false; rolls.len()];
    for &i in order.iter().take(n) {
        kept[i] = true;
    }
    kept
}
