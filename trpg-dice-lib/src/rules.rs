use crate::dice::KeepPolicy;
use crate::dice::RollSpec;
use crate::error::Error;
use crate::error::Result;
use crate::limits::Limits;
use crate::parser::Rule;
use crate::tokenizer::Scanned;
use once_cell::sync::Lazy;
use pest::iterators::Pair;

/// Fields gathered while walking the token stream
pub(crate) struct Draft<'s> {
    scanned: &'s Scanned,
    count: u64,
    sides: u64,
    modifier: i64,
    multiplier: u64,
    keep: KeepPolicy,
    constant: bool,
}

impl<'s> Draft<'s> {
    pub(crate) fn new(scanned: &'s Scanned) -> Self {
        Draft {
            scanned,
            count: 0,
            sides: 0,
            modifier: 0,
            multiplier: 1,
            keep: KeepPolicy::KeepAll,
            constant: false,
        }
    }

    pub(crate) fn finish(self, limits: &Limits) -> Result<RollSpec> {
        if self.constant {
            RollSpec::constant(self.modifier, limits)
        } else {
            RollSpec::new(
                self.count,
                self.sides,
                self.modifier,
                self.multiplier,
                self.keep,
                limits,
            )
        }
    }

    fn number(&self, pair: Pair<Rule>) -> Result<u64> {
        pair.as_str().parse::<u64>().map_err(|_| {
            Error::parse(
                "number is too large",
                self.scanned.position(pair.as_span().start()),
            )
        })
    }

    /// Parse a `sign? integer` sequence
    fn signed(&self, pair: Pair<Rule>) -> Result<i64> {
        let start = self.scanned.position(pair.as_span().start());
        let mut negative = false;
        let mut value = 0;
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::sign => negative = inner.as_str() == "-",
                Rule::integer => value = self.number(inner)?,
                _ => (),
            }
        }
        let value = i64::try_from(value).map_err(|_| Error::parse("number is too large", start))?;
        Ok(if negative { -value } else { value })
    }

    fn inner_number(&self, pair: Pair<Rule>) -> Result<u64> {
        let start = self.scanned.position(pair.as_span().start());
        match pair.into_inner().find(|p| p.as_rule() == Rule::integer) {
            Some(integer) => self.number(integer),
            None => Err(Error::parse("expected a number", start)),
        }
    }
}

type Handler = fn(&mut Draft, Pair<Rule>) -> Result<()>;

/// Ordered table of grammar rules and what each contributes to a [`Draft`]
pub(crate) struct Registry {
    rules: Vec<(Rule, Handler)>,
}

impl Registry {
    fn new() -> Self {
        Registry { rules: Vec::new() }
    }

    fn on(mut self, rule: Rule, handler: Handler) -> Self {
        self.rules.push((rule, handler));
        self
    }

    /// Run the handler registered for `pair`, if any
    pub(crate) fn apply(&self, draft: &mut Draft, pair: Pair<Rule>) -> Result<()> {
        match self.rules.iter().find(|(rule, _)| *rule == pair.as_rule()) {
            Some((rule, handler)) => {
                tracing::trace!(?rule, token = pair.as_str(), "handling rule");
                handler(draft, pair)
            }
            None => Ok(()),
        }
    }
}

fn dice(draft: &mut Draft, _: Pair<Rule>) -> Result<()> {
    // `d20` means `1d20`, an explicit amount overrides this right after
    draft.count = 1;
    Ok(())
}

fn nb_dice(draft: &mut Draft, pair: Pair<Rule>) -> Result<()> {
    draft.count = draft.number(pair)?;
    Ok(())
}

fn sides(draft: &mut Draft, pair: Pair<Rule>) -> Result<()> {
    draft.sides = draft.number(pair)?;
    Ok(())
}

fn modifier(draft: &mut Draft, pair: Pair<Rule>) -> Result<()> {
    let start = draft.scanned.position(pair.as_span().start());
    let value = draft.signed(pair)?;
    draft.modifier = draft
        .modifier
        .checked_add(value)
        .ok_or_else(|| Error::parse("modifier is too large", start))?;
    Ok(())
}

fn keep_hi(draft: &mut Draft, pair: Pair<Rule>) -> Result<()> {
    draft.keep = KeepPolicy::KeepHighest(draft.inner_number(pair)?);
    Ok(())
}

fn keep_lo(draft: &mut Draft, pair: Pair<Rule>) -> Result<()> {
    draft.keep = KeepPolicy::KeepLowest(draft.inner_number(pair)?);
    Ok(())
}

fn multiplier(draft: &mut Draft, pair: Pair<Rule>) -> Result<()> {
    draft.multiplier = draft.inner_number(pair)?;
    Ok(())
}

fn constant(draft: &mut Draft, pair: Pair<Rule>) -> Result<()> {
    draft.constant = true;
    draft.modifier = draft.signed(pair)?;
    Ok(())
}

pub(crate) static RULES: Lazy<Registry> = Lazy::new(|| {
    Registry::new()
        .on(Rule::dice, dice)
        .on(Rule::nb_dice, nb_dice)
        .on(Rule::sides, sides)
        .on(Rule::modifier, modifier)
        .on(Rule::keep_hi, keep_hi)
        .on(Rule::keep_lo, keep_lo)
        .on(Rule::multiplier, multiplier)
        .on(Rule::constant, constant)
});
