pub mod kind;

pub use kind::BatchSummary;
pub use kind::RollResult;

/// Keep the roll expression type
#[derive(Debug, Clone)]
pub enum Kind {
    Single(RollResult),
    Batch(BatchSummary),
}

/// Keep a roll expression result
#[derive(Debug, Clone)]
pub struct Result {
    result: Kind,
}

impl Result {
    /// New with single roll expression
    pub fn new_single(r: RollResult) -> Self {
        Result {
            result: Kind::Single(r),
        }
    }

    /// New with repeated roll expression
    pub fn new_batch(b: BatchSummary) -> Self {
        Result {
            result: Kind::Batch(b),
        }
    }

    pub fn get_result(&self) -> &Kind {
        &self.result
    }

    /// Check and return result as single roll expression
    pub fn as_single(&self) -> Option<&RollResult> {
        match &self.result {
            Kind::Single(result) => Some(result),
            Kind::Batch(_) => None,
        }
    }

    /// Check and return result as repeated roll expression
    pub fn as_batch(&self) -> Option<&BatchSummary> {
        match &self.result {
            Kind::Single(_) => None,
            Kind::Batch(results) => Some(results),
        }
    }

    /// Numeric outcome handed back to callers, the average for a batch
    pub fn get_total(&self) -> f64 {
        match &self.result {
            Kind::Single(single) => single.get_total() as f64,
            Kind::Batch(batch) => batch.average(),
        }
    }
}

impl std::fmt::Display for Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.result {
            Kind::Single(single) => write!(f, "{single}"),
            Kind::Batch(batch) => write!(f, "{batch}"),
        }
    }
}

/// Interface for rolling dices
///
/// Implementors return a value in `1..=sides`.
pub trait Source {
    fn throw(&mut self, sides: u64) -> u64;
}
