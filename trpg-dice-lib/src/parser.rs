use crate::dice::RollSpec;
use crate::error::Result;
use crate::limits::Limits;
use crate::rules::Draft;
use crate::rules::RULES;
use crate::tokenizer::Scanned;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "dice.pest"]
pub struct Parser;

/// Turn a dice expression into a bounded [`RollSpec`]
///
/// Every grammar rule with a registered handler contributes to the result in
/// source order; structural rules are passed over.
pub fn parse_expression(text: &str, limits: &Limits) -> Result<RollSpec> {
    let scanned = Scanned::new(text)?;
    let mut draft = Draft::new(&scanned);
    for pair in scanned.tokens()?.flatten() {
        RULES.apply(&mut draft, pair)?;
    }
    let spec = draft.finish(limits)?;
    tracing::debug!(input = text, %spec, "parsed dice expression");
    Ok(spec)
}
