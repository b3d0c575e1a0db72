use crate::dice::KeepPolicy;
use crate::dice::RollSpec;
use crate::roll::BatchSummary;
use crate::roll::RollResult;
use itertools::Itertools;

/// Render a roll as `` `expression` breakdown = **total** ``
///
/// Dropped dice are struck through, a zero modifier and a unit multiplier are
/// left out.
pub fn format(result: &RollResult, spec: &RollSpec) -> String {
    format!(
        "`{}` {} = **{}**",
        spec,
        breakdown(result, spec),
        result.get_total()
    )
}

/// Render every roll of a batch followed by its statistics
pub fn format_batch(batch: &BatchSummary) -> String {
    let lines = batch
        .iter()
        .enumerate()
        .map(|(i, roll)| format!("#{} {}", i + 1, roll))
        .join("\n");
    format!(
        "{}\n*min* **{}** *max* **{}** *average* **{:.2}**",
        lines,
        batch.min(),
        batch.max(),
        batch.average()
    )
}

fn breakdown(result: &RollResult, spec: &RollSpec) -> String {
    if spec.is_constant() {
        return spec.modifier().to_string();
    }
    let marks = spec.keep() != KeepPolicy::KeepAll;
    let dice = result
        .rolls()
        .iter()
        .enumerate()
        .map(|(i, r)| {
            if marks && !result.is_kept(i) {
                format!("~~{}~~", r.value)
            } else {
                r.value.to_string()
            }
        })
        .join(", ");
    let chain = match spec.modifier() {
        0 => format!("[{dice}]"),
        m if m < 0 => format!("[{dice}] - {}", m.unsigned_abs()),
        m => format!("[{dice}] + {m}"),
    };
    match spec.multiplier() {
        1 => chain,
        m if spec.modifier() == 0 => format!("{chain} x {m}"),
        m => format!("({chain}) x {m}"),
    }
}
