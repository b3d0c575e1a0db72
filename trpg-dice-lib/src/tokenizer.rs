use crate::error::Error;
use crate::error::Result;
use crate::parser;
use crate::parser::Rule;
use itertools::Itertools;
use pest::error::ErrorVariant;
use pest::error::InputLocation;
use pest::iterators::Pairs;
use pest::Parser;

/// Expression stripped of whitespace, remembering where each character came from
#[derive(Debug, Clone)]
pub(crate) struct Scanned {
    text: String,
    offsets: Vec<usize>,
    len: usize,
}

impl Scanned {
    /// Validate the raw expression character by character
    ///
    /// Catches the failures that can be named precisely before the grammar
    /// runs: foreign characters, a second dice marker, a second keep suffix,
    /// suffixes ahead of the dice term and unbalanced parentheses.
    pub(crate) fn new(input: &str) -> Result<Self> {
        let mut text = String::with_capacity(input.len());
        let mut offsets = Vec::with_capacity(input.len());
        let mut dice: Option<usize> = None;
        let mut keep: Option<char> = None;
        let mut open: Option<usize> = None;
        let mut len = 0;
        for (pos, raw) in input.chars().enumerate() {
            len = pos + 1;
            if raw.is_whitespace() {
                continue;
            }
            let c = raw.to_ascii_lowercase();
            match c {
                '0'..='9' | '+' | '-' => (),
                'd' => {
                    if dice.is_some() {
                        return Err(Error::parse("only one dice term is allowed", pos));
                    }
                    dice = Some(pos);
                }
                'k' | 'l' => {
                    match keep {
                        Some(prev) if prev == c => {
                            return Err(Error::parse("duplicate keep suffix", pos))
                        }
                        Some(_) => {
                            return Err(Error::parse(
                                "keep highest and keep lowest are mutually exclusive",
                                pos,
                            ))
                        }
                        None => (),
                    }
                    if dice.is_none() {
                        return Err(Error::parse("keep suffix must follow the dice term", pos));
                    }
                    keep = Some(c);
                }
                'x' | '*' => {
                    if dice.is_none() {
                        return Err(Error::parse("multiplier must follow the dice term", pos));
                    }
                }
                '(' => {
                    if open.is_some() {
                        return Err(Error::parse("nested parentheses are not supported", pos));
                    }
                    open = Some(pos);
                }
                ')' => {
                    if open.take().is_none() {
                        return Err(Error::parse("unmatched parenthesis", pos));
                    }
                }
                c => return Err(Error::parse(format!("unexpected character `{c}`"), pos)),
            }
            text.push(c);
            offsets.push(pos);
        }
        if let Some(pos) = open {
            return Err(Error::parse("unmatched parenthesis", pos));
        }
        if text.is_empty() {
            return Err(Error::parse("empty expression", 0));
        }
        Ok(Scanned { text, offsets, len })
    }

    /// Run the grammar over the stripped expression
    pub(crate) fn tokens(&self) -> Result<Pairs<'_, Rule>> {
        parser::Parser::parse(Rule::command, &self.text).map_err(|e| {
            let at = match e.location {
                InputLocation::Pos(at) => at,
                InputLocation::Span((at, _)) => at,
            };
            let reason = match &e.variant {
                ErrorVariant::ParsingError { positives, .. } if !positives.is_empty() => {
                    format!(
                        "expected {}",
                        positives.iter().map(|r| describe(*r)).unique().join(" or ")
                    )
                }
                ErrorVariant::ParsingError { .. } => "unexpected token".to_owned(),
                ErrorVariant::CustomError { message } => message.clone(),
            };
            Error::parse(reason, self.position(at))
        })
    }

    /// Map a byte offset in the stripped text back to the raw input
    pub(crate) fn position(&self, at: usize) -> usize {
        self.offsets.get(at).copied().unwrap_or(self.len)
    }
}

fn describe(rule: Rule) -> &'static str {
    match rule {
        Rule::integer | Rule::nb_dice | Rule::sides | Rule::constant => "a number",
        Rule::sign | Rule::modifier => "a modifier",
        Rule::keep_hi | Rule::keep_lo => "a keep suffix",
        Rule::multiplier => "a multiplier",
        Rule::dice | Rule::chain | Rule::group | Rule::roll_expr => "a dice term",
        Rule::EOI => "end of expression",
        _ => "an expression",
    }
}
